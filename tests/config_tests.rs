use aurora_init::config::AppConfig;
use aurora_init::error::InitError;

#[test]
fn defaults_are_valid() {
    let cfg = AppConfig::default();
    assert!(cfg.validate().is_ok());
    assert!(!cfg.proxy_enabled);
    assert_eq!(cfg.log_level, "INFO");
}

#[test]
fn socks5_proxy_is_accepted() {
    let cfg = AppConfig {
        proxy: "socks5://127.0.0.1:1080".to_string(),
        ..AppConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn unsupported_proxy_scheme_is_rejected() {
    let cfg = AppConfig {
        proxy: "ftp://127.0.0.1:2121".to_string(),
        ..AppConfig::default()
    };
    match cfg.validate() {
        Err(InitError::UnsupportedProxyScheme(scheme)) => assert_eq!(scheme, "ftp"),
        other => panic!("expected UnsupportedProxyScheme, got {:?}", other),
    }
}

#[test]
fn garbage_proxy_is_rejected() {
    let cfg = AppConfig {
        proxy: "not a url".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(InitError::UrlParse(_))));
}
