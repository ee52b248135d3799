//! 请求上下文读写。
//!
//! 把一个可原地修改的 [`ReqContext`] 绑定到请求扩展（[`Extensions`]）里，
//! 供后续中间件与 handlers 以固定类型键读写。类型键是
//! `Arc<RwLock<ReqContext<T>>>`，按不同的 `T` 查找会落空，
//! 等同于"未初始化"。
//!
//! 失败语义：所有函数都不返回错误。上下文未初始化时，
//! 读取函数降级为零值（0 / "" / None），写入函数记录一条
//! warning 后跳过。调用方因此不会因漏调 [`init`] 而中断请求。

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{Identity, ReqContext, Response, dept};
use http::Extensions;
use serde_json::Value;
use tracing::warn;

/// 绑定到请求扩展中的共享上下文句柄。
pub type SharedContext<T> = Arc<RwLock<ReqContext<T>>>;

/// 初始化上下文并绑定到请求扩展，后续流程可通过扩展修改。
/// 重复调用会完整覆盖之前绑定的上下文。
pub fn init<T>(ext: &mut Extensions, ctx: ReqContext<T>)
where
    T: Send + Sync + 'static,
{
    ext.insert::<SharedContext<T>>(Arc::new(RwLock::new(ctx)));
}

/// 获取上下文句柄，未初始化（或响应负载类型不匹配）时返回 None。
pub fn get<T>(ext: &Extensions) -> Option<SharedContext<T>>
where
    T: Send + Sync + 'static,
{
    ext.get::<SharedContext<T>>().cloned()
}

/// 读取上下文快照（克隆），用于访问日志等响应后消费。
pub fn snapshot<T>(shared: &SharedContext<T>) -> ReqContext<T>
where
    T: Clone + Send + Sync + 'static,
{
    read(shared).clone()
}

/// 设置用户身份，完整覆盖之前的身份。
pub fn set_user<T>(ext: &Extensions, user: Identity)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_user called before init");
        return;
    };
    write(&shared).user = Some(user);
}

/// 设置响应元信息，供访问日志使用。
pub fn set_response<T>(ext: &Extensions, response: Response<T>)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_response called before init");
        return;
    };
    write(&shared).response = Some(response);
}

/// 设置应用模块。
pub fn set_module<T>(ext: &Extensions, module: impl Into<String>)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_module called before init");
        return;
    };
    write(&shared).module = module.into();
}

/// 设置插件名称。
pub fn set_addon_name<T>(ext: &Extensions, name: impl Into<String>)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_addon_name called before init");
        return;
    };
    write(&shared).addon_name = name.into();
}

/// 获取用户身份。
pub fn get_user<T>(ext: &Extensions) -> Option<Identity>
where
    T: Send + Sync + 'static,
{
    let shared = get::<T>(ext)?;
    read(&shared).user.clone()
}

/// 获取用户 ID。
pub fn get_user_id<T>(ext: &Extensions) -> i64
where
    T: Send + Sync + 'static,
{
    get_user::<T>(ext).map(|user| user.id).unwrap_or(0)
}

/// 获取用户角色 ID。
pub fn get_role_id<T>(ext: &Extensions) -> i64
where
    T: Send + Sync + 'static,
{
    get_user::<T>(ext).map(|user| user.role_id).unwrap_or(0)
}

/// 获取用户角色唯一编码。
pub fn get_role_key<T>(ext: &Extensions) -> String
where
    T: Send + Sync + 'static,
{
    get_user::<T>(ext)
        .map(|user| user.role_key)
        .unwrap_or_default()
}

/// 获取用户部门类型。
pub fn get_dept_type<T>(ext: &Extensions) -> String
where
    T: Send + Sync + 'static,
{
    get_user::<T>(ext)
        .map(|user| user.dept_type)
        .unwrap_or_default()
}

/// 获取应用模块。
pub fn get_module<T>(ext: &Extensions) -> String
where
    T: Send + Sync + 'static,
{
    match get::<T>(ext) {
        Some(shared) => read(&shared).module.clone(),
        None => String::new(),
    }
}

/// 获取插件名称。
pub fn get_addon_name<T>(ext: &Extensions) -> String
where
    T: Send + Sync + 'static,
{
    match get::<T>(ext) {
        Some(shared) => read(&shared).addon_name.clone(),
        None => String::new(),
    }
}

/// 获取响应元信息。
pub fn get_response<T>(ext: &Extensions) -> Option<Response<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let shared = get::<T>(ext)?;
    read(&shared).response.clone()
}

/// 是否为插件模块请求。
pub fn is_addon_request<T>(ext: &Extensions) -> bool
where
    T: Send + Sync + 'static,
{
    !get_addon_name::<T>(ext).is_empty()
}

/// 是否为公司部门。
pub fn is_company_dept<T>(ext: &Extensions) -> bool
where
    T: Send + Sync + 'static,
{
    get_dept_type::<T>(ext) == dept::COMPANY
}

/// 是否为租户部门。
pub fn is_tenant_dept<T>(ext: &Extensions) -> bool
where
    T: Send + Sync + 'static,
{
    get_dept_type::<T>(ext) == dept::TENANT
}

/// 是否为商户部门。
pub fn is_merchant_dept<T>(ext: &Extensions) -> bool
where
    T: Send + Sync + 'static,
{
    get_dept_type::<T>(ext) == dept::MERCHANT
}

/// 是否为普通用户部门。
pub fn is_user_dept<T>(ext: &Extensions) -> bool
where
    T: Send + Sync + 'static,
{
    get_dept_type::<T>(ext) == dept::USER
}

/// 写入一条额外数据，已存在的键会被覆盖。
pub fn set_data<T>(ext: &Extensions, key: impl Into<String>, value: Value)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_data called before init");
        return;
    };
    write(&shared).data.insert(key.into(), value);
}

/// 逐条合并一批额外数据，重复键以最后写入为准。
pub fn set_data_map<T>(ext: &Extensions, entries: HashMap<String, Value>)
where
    T: Send + Sync + 'static,
{
    let Some(shared) = get::<T>(ext) else {
        warn!("contexts::set_data_map called before init");
        return;
    };
    let mut guard = write(&shared);
    for (key, value) in entries {
        guard.data.insert(key, value);
    }
}

/// 获取全部额外数据，未初始化时返回 None。
pub fn get_data<T>(ext: &Extensions) -> Option<HashMap<String, Value>>
where
    T: Send + Sync + 'static,
{
    let shared = get::<T>(ext)?;
    Some(read(&shared).data.clone())
}

// 锁中毒时沿用内部数据，本层不引入 panic 路径。
fn read<T>(shared: &SharedContext<T>) -> RwLockReadGuard<'_, ReqContext<T>> {
    shared.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(shared: &SharedContext<T>) -> RwLockWriteGuard<'_, ReqContext<T>> {
    shared.write().unwrap_or_else(PoisonError::into_inner)
}
