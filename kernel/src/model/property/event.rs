use derive_new::new;

use crate::model::id::PropertyId;

#[derive(new, Debug)]
pub struct CreateProperty {
    pub name: String,
    pub description: String,
    pub total_rooms_number: Option<i64>,
}

// 指定のない項目は登録済みの値を引き継ぐ
#[derive(new, Debug)]
pub struct UpdateProperty {
    pub property_id: PropertyId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_rooms_number: Option<i64>,
}
