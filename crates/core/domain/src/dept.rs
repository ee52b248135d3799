//! 部门类型常量：标记身份所属的部门类别，用于授权分支。

pub const COMPANY: &str = "company";
pub const TENANT: &str = "tenant";
pub const MERCHANT: &str = "merchant";
pub const USER: &str = "user";
