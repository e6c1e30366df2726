//! 类型定义模块

mod draft;
mod field_path;
mod validation;

pub use draft::{AddressDraft, CompanyDraft, GeoDraft, UserDraft};
pub use field_path::{FieldPath, UnknownFieldPath};
pub use validation::ValidationError;

// Re-export client 库的公共类型
pub use user_directory_client::{Address, Company, Geo, UserRecord};
