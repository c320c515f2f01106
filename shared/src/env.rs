use std::env;
use strum::EnumString;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

// 開発環境・本番環境のどちら向けのビルドであるかを示す
pub fn which() -> Environment {
    // debug_assertions が on の場合はデフォルト設定を development にし、
    // そうでない場合は production にする
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => v.parse().unwrap_or(default_env),
    }
}

// Lambda 上で起動しているかどうか
pub fn is_lambda_runtime() -> bool {
    ["AWS_LAMBDA_RUNTIME_API", "LAMBDA_TASK_ROOT", "AWS_EXECUTION_ENV"]
        .iter()
        .any(|key| env::var_os(key).is_some())
}
