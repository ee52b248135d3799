use std::collections::HashMap;

use admin_contexts as contexts;
use domain::{Identity, ReqContext, Response, dept};
use http::Extensions;
use serde_json::{Value, json};

fn identity(dept_type: &str) -> Identity {
    Identity {
        id: 7,
        role_id: 3,
        role_key: "admin".to_string(),
        dept_type: dept_type.to_string(),
    }
}

fn initialized(module: &str) -> Extensions {
    let mut ext = Extensions::new();
    contexts::init(&mut ext, ReqContext::<Value>::new(module));
    ext
}

#[test]
fn getters_return_zero_values_without_init() {
    let ext = Extensions::new();

    assert!(contexts::get::<Value>(&ext).is_none());
    assert!(contexts::get_user::<Value>(&ext).is_none());
    assert_eq!(contexts::get_user_id::<Value>(&ext), 0);
    assert_eq!(contexts::get_role_id::<Value>(&ext), 0);
    assert_eq!(contexts::get_role_key::<Value>(&ext), "");
    assert_eq!(contexts::get_dept_type::<Value>(&ext), "");
    assert_eq!(contexts::get_module::<Value>(&ext), "");
    assert_eq!(contexts::get_addon_name::<Value>(&ext), "");
    assert!(contexts::get_response::<Value>(&ext).is_none());
    assert!(contexts::get_data::<Value>(&ext).is_none());
    assert!(!contexts::is_addon_request::<Value>(&ext));
    assert!(!contexts::is_company_dept::<Value>(&ext));
    assert!(!contexts::is_tenant_dept::<Value>(&ext));
    assert!(!contexts::is_merchant_dept::<Value>(&ext));
    assert!(!contexts::is_user_dept::<Value>(&ext));
}

#[test]
fn setters_skip_without_init() {
    let ext = Extensions::new();

    contexts::set_user::<Value>(&ext, identity(dept::COMPANY));
    contexts::set_response::<Value>(&ext, Response::success(json!(1), "trace-1"));
    contexts::set_module::<Value>(&ext, "orders");
    contexts::set_addon_name::<Value>(&ext, "billing");
    contexts::set_data::<Value>(&ext, "k", json!("v"));
    contexts::set_data_map::<Value>(&ext, HashMap::from([("a".to_string(), json!(1))]));

    // 句柄上没有任何东西被写入
    assert!(contexts::get::<Value>(&ext).is_none());
    assert!(contexts::get_user::<Value>(&ext).is_none());
    assert_eq!(contexts::get_module::<Value>(&ext), "");
    assert_eq!(contexts::get_addon_name::<Value>(&ext), "");
    assert!(contexts::get_data::<Value>(&ext).is_none());
}

#[test]
fn init_round_trips() {
    let mut ext = Extensions::new();
    contexts::init(&mut ext, ReqContext::<Value>::new("admin"));

    let shared = contexts::get::<Value>(&ext).expect("context");
    let ctx = contexts::snapshot(&shared);
    assert_eq!(ctx.module, "admin");
    assert!(ctx.user.is_none());
    assert!(ctx.data.is_empty());
}

#[test]
fn reinit_overwrites_previous_context() {
    let mut ext = initialized("admin");
    contexts::set_user::<Value>(&ext, identity(dept::COMPANY));

    contexts::init(&mut ext, ReqContext::<Value>::new("api"));
    assert_eq!(contexts::get_module::<Value>(&ext), "api");
    assert!(contexts::get_user::<Value>(&ext).is_none());
}

#[test]
fn payload_type_mismatch_reads_as_absent() {
    let ext = initialized("admin");

    // 初始化用的是 Value 负载，用 String 负载查找等同于未初始化
    assert!(contexts::get::<String>(&ext).is_none());
    assert_eq!(contexts::get_module::<String>(&ext), "");
    contexts::set_module::<String>(&ext, "orders");
    assert_eq!(contexts::get_module::<Value>(&ext), "admin");
}

#[test]
fn set_user_round_trips() {
    let ext = initialized("admin");
    let user = identity(dept::COMPANY);

    contexts::set_user::<Value>(&ext, user.clone());

    assert_eq!(contexts::get_user::<Value>(&ext), Some(user));
    assert_eq!(contexts::get_user_id::<Value>(&ext), 7);
    assert_eq!(contexts::get_role_id::<Value>(&ext), 3);
    assert_eq!(contexts::get_role_key::<Value>(&ext), "admin");
    assert_eq!(contexts::get_dept_type::<Value>(&ext), dept::COMPANY);
}

#[test]
fn dept_predicates_are_mutually_exclusive() {
    let cases = [
        (dept::COMPANY, [true, false, false, false]),
        (dept::TENANT, [false, true, false, false]),
        (dept::MERCHANT, [false, false, true, false]),
        (dept::USER, [false, false, false, true]),
        ("unknown", [false, false, false, false]),
        ("", [false, false, false, false]),
    ];

    for (dept_type, expected) in cases {
        let ext = initialized("admin");
        contexts::set_user::<Value>(&ext, identity(dept_type));

        assert_eq!(contexts::is_company_dept::<Value>(&ext), expected[0]);
        assert_eq!(contexts::is_tenant_dept::<Value>(&ext), expected[1]);
        assert_eq!(contexts::is_merchant_dept::<Value>(&ext), expected[2]);
        assert_eq!(contexts::is_user_dept::<Value>(&ext), expected[3]);
    }
}

#[test]
fn data_bag_merges_and_overwrites() {
    let ext = initialized("admin");

    contexts::set_data::<Value>(&ext, "k", json!("v"));
    let data = contexts::get_data::<Value>(&ext).expect("data");
    assert_eq!(data.get("k"), Some(&json!("v")));

    contexts::set_data_map::<Value>(
        &ext,
        HashMap::from([("a".to_string(), json!(1)), ("b".to_string(), json!(2))]),
    );
    let data = contexts::get_data::<Value>(&ext).expect("data");
    assert_eq!(data.get("k"), Some(&json!("v")));
    assert_eq!(data.get("a"), Some(&json!(1)));
    assert_eq!(data.get("b"), Some(&json!(2)));

    // 重复键以最后写入为准
    contexts::set_data::<Value>(&ext, "a", json!(9));
    let data = contexts::get_data::<Value>(&ext).expect("data");
    assert_eq!(data.get("a"), Some(&json!(9)));
    assert_eq!(data.len(), 3);
}

#[test]
fn addon_request_follows_addon_name() {
    let ext = initialized("admin");
    assert!(!contexts::is_addon_request::<Value>(&ext));

    contexts::set_addon_name::<Value>(&ext, "billing");
    assert!(contexts::is_addon_request::<Value>(&ext));
    assert_eq!(contexts::get_addon_name::<Value>(&ext), "billing");
}

#[test]
fn set_response_visible_to_snapshot() {
    let ext = initialized("admin");
    contexts::set_response::<Value>(&ext, Response::success(json!({"ok": true}), "trace-1"));

    let response = contexts::get_response::<Value>(&ext).expect("response");
    assert_eq!(response.code, 0);
    assert_eq!(response.trace_id, "trace-1");

    let shared = contexts::get::<Value>(&ext).expect("context");
    let ctx = contexts::snapshot(&shared);
    assert_eq!(ctx.response.map(|r| r.code), Some(0));
}

#[test]
fn end_to_end_request_flow() {
    let mut ext = Extensions::new();
    contexts::init(&mut ext, ReqContext::<Value>::new("admin"));

    contexts::set_module::<Value>(&ext, "orders");
    contexts::set_user::<Value>(
        &ext,
        Identity {
            id: 7,
            role_id: 0,
            role_key: String::new(),
            dept_type: dept::COMPANY.to_string(),
        },
    );

    assert_eq!(contexts::get_module::<Value>(&ext), "orders");
    assert_eq!(contexts::get_user_id::<Value>(&ext), 7);
    assert!(contexts::is_company_dept::<Value>(&ext));
    assert!(!contexts::is_tenant_dept::<Value>(&ext));
}
