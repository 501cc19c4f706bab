use anyhow::Result;
use customer_transform::{parse_record, transform, validate_value, AgeStatus, CustomerRecord};
use serde_json::{json, Value};

fn sample_record() -> Value {
    json!({
        "customerId": "C1",
        "firstName": "Ana",
        "email": "a@x.com",
        "phone": "555",
        "address": {
            "street": "1 Rd",
            "city": "X",
            "state": "CA",
            "zipCode": "90001"
        },
        "accountType": "PREMIUM",
        "balance": 15000,
        "age": 30,
        "preferences": {"notifications": true}
    })
}

/// 缺少必要欄位時,錯誤必須指名該欄位
#[test]
fn test_missing_age_names_the_field() {
    let mut record = sample_record();
    record.as_object_mut().unwrap().remove("age");

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "age");
    assert!(err.to_string().contains("age"));
}

/// 巢狀欄位的錯誤必須使用完整點分路徑
#[test]
fn test_missing_nested_field_uses_dotted_path() {
    let mut record = sample_record();
    record["address"].as_object_mut().unwrap().remove("zipCode");

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "address.zipCode");
}

/// 整個 address 物件缺少時,回報容器路徑而非其子欄位
#[test]
fn test_missing_address_reports_the_container() {
    let mut record = sample_record();
    record.as_object_mut().unwrap().remove("address");

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "address");
}

#[test]
fn test_broken_container_reported_before_its_fields() {
    let mut record = sample_record();
    record["address"] = json!(5);

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "address");
    assert!(err.to_string().contains("expected object"));
}

#[test]
fn test_text_balance_is_rejected() {
    let mut record = sample_record();
    record["balance"] = json!("lots");

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "balance");
    assert!(err.to_string().contains("expected number"));
}

#[test]
fn test_fractional_age_is_rejected() {
    let mut record = sample_record();
    record["age"] = json!(30.5);

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "age");
}

/// 整數值的浮點數年齡(30.0)視為合法整數
#[test]
fn test_whole_float_age_is_accepted() -> Result<()> {
    let mut record = sample_record();
    record["age"] = json!(30.0);

    let profile = transform(&record)?;
    assert_eq!(profile.account.status, AgeStatus::Adult);
    Ok(())
}

#[test]
fn test_null_field_is_rejected() {
    let mut record = sample_record();
    record["email"] = json!(null);

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "email");
}

#[test]
fn test_extra_fields_are_ignored() -> Result<()> {
    let mut record = sample_record();
    record
        .as_object_mut()
        .unwrap()
        .insert("loyaltyPoints".to_string(), json!(250));

    assert!(transform(&record).is_ok());
    Ok(())
}

/// notifications 不限型別,任何 JSON 值都原樣帶到輸出
#[test]
fn test_notifications_copied_verbatim() -> Result<()> {
    let mut record = sample_record();
    record["preferences"]["notifications"] = json!({"email": true, "sms": false});

    let profile = transform(&record)?;
    assert_eq!(
        profile.settings.notifications,
        json!({"email": true, "sms": false})
    );
    Ok(())
}

/// notifications 為 null 時仍視為存在,原樣複製
#[test]
fn test_null_notifications_is_accepted() -> Result<()> {
    let mut record = sample_record();
    record["preferences"]["notifications"] = json!(null);

    let profile = transform(&record)?;
    assert_eq!(profile.settings.notifications, json!(null));
    Ok(())
}

/// 快速失敗:多個欄位同時有問題時,回報結構順序中的第一個
#[test]
fn test_first_schema_violation_wins() {
    let mut record = sample_record();
    record.as_object_mut().unwrap().remove("firstName");
    record["age"] = json!("old");

    let err = transform(&record).unwrap_err();
    assert_eq!(err.field(), "firstName");
}

#[test]
fn test_validate_value_alone_accepts_good_record() {
    assert!(validate_value(&sample_record()).is_ok());
}

/// 記錄經 serde 反序列化須與 parse_record 一致,序列化後維持 camelCase 欄位名
#[test]
fn test_record_serde_round_trip_matches_parse() -> Result<()> {
    let value = sample_record();

    let deserialized: CustomerRecord = serde_json::from_value(value.clone())?;
    let parsed = parse_record(&value)?;
    assert_eq!(deserialized, parsed);

    let back = serde_json::to_value(&deserialized)?;
    assert_eq!(back["customerId"], json!("C1"));
    assert_eq!(back["firstName"], json!("Ana"));
    assert_eq!(back["accountType"], json!("PREMIUM"));
    assert_eq!(back["address"]["zipCode"], json!("90001"));
    assert_eq!(back, value);
    Ok(())
}

#[test]
fn test_non_object_input_is_rejected() {
    let err = transform(&json!("not a record")).unwrap_err();
    assert_eq!(err.field(), "record");
}
