use crate::domain::category::value_objects::{CategoryCode, CategoryId, CategoryName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub code: CategoryCode,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub code: CategoryCode,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub code: CategoryCode,
}
