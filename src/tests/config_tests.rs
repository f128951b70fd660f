use std::env;

use crate::config::{ListConfig, PositionPolicy};
use crate::error::ListError;

#[test]
fn test1_parse_position_policy() {
    assert_eq!(Ok(PositionPolicy::Append), "append".parse::<PositionPolicy>());
    assert_eq!(Ok(PositionPolicy::Strict), " STRICT ".parse::<PositionPolicy>());
    assert_eq!(
        Err(ListError::UnknownPolicy(String::from("wrap"))),
        "wrap".parse::<PositionPolicy>()
    );
}

#[test]
fn test2_default_config_appends() {
    let config = ListConfig::default();
    assert_eq!(PositionPolicy::Append, config.position_policy);

    let config = config.with_position_policy(PositionPolicy::Strict);
    assert_eq!(PositionPolicy::Strict, config.position_policy);
}

#[test]
fn test3_config_from_variable() {
    let key = "SINGLY_LINKED_TEST_POSITION_POLICY";

    env::remove_var(key);
    assert_eq!(Ok(ListConfig::default()), ListConfig::from_var(key));

    env::set_var(key, "strict");
    assert_eq!(
        Ok(ListConfig::default().with_position_policy(PositionPolicy::Strict)),
        ListConfig::from_var(key)
    );

    env::set_var(key, "sideways");
    assert_eq!(
        Err(ListError::UnknownPolicy(String::from("sideways"))),
        ListConfig::from_var(key)
    );
    env::remove_var(key);
}

#[cfg(unix)]
#[test]
fn test4_non_unicode_variable_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let key = "SINGLY_LINKED_TEST_RAW_POSITION_POLICY";

    env::set_var(key, OsStr::from_bytes(&[0x73, 0xff, 0x74]));
    assert_eq!(
        Err(ListError::UnknownPolicy(String::from("s\u{fffd}t"))),
        ListConfig::from_var(key)
    );
    env::remove_var(key);
}
