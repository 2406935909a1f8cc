use iconline::*;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// load_config reads process-wide environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDES: [&str; 6] = [
    "ICONLINE_THEME",
    "ICONLINE_WARM_COLOR",
    "ICONLINE_COOL_COLOR",
    "ICONLINE_PLAIN_COLOR",
    "ICONLINE_DARKNESS",
    "ICONLINE_DESATURATION",
];

fn clear_overrides() {
    for key in OVERRIDES {
        std::env::remove_var(key);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.theme, "dark");
    assert_eq!(config.palette(), get_palette("dark"));
    assert_eq!(config.transform(), ColorTransform::default());
    assert_eq!(config.left_layout(), default_left());
    assert_eq!(config.right_layout(), default_right());
}

#[test]
fn test_explicit_colors_override_palette() {
    let config = Config {
        theme: "nord".to_string(),
        warm_color: Some("tomato".to_string()),
        ..Config::default()
    };

    let palette = config.palette();
    assert_eq!(palette.warm, "tomato");
    assert_eq!(palette.cool, get_palette("nord").cool);
    assert_eq!(palette.plain, get_palette("nord").plain);
}

#[test]
fn test_load_config_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("iconline.json");
    let config_content = r##"{
        "theme": "tokyo-night",
        "warmColor": "#ff0000",
        "darkness": 35,
        "left": ["buffer-name", {"segment": "branch-name", "tightLeft": true}],
        "right": []
    }"##;
    fs::write(&config_path, config_content).unwrap();

    let config = load_config(Some(config_path)).unwrap();

    assert_eq!(config.theme, "tokyo-night");
    assert_eq!(config.palette().warm, "#ff0000");
    assert_eq!(config.palette().cool, get_palette("tokyo-night").cool);
    assert_eq!(config.transform().darkness, 35.0);
    assert_eq!(config.transform().desaturation, DEFAULT_DESATURATION);
    assert_eq!(
        config.left_layout(),
        vec![LayoutEntry::new("buffer-name"), LayoutEntry::new("branch-name").tight_left()]
    );
    assert!(config.right_layout().is_empty());
}

#[test]
fn test_env_overrides_win_over_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("iconline.json");
    fs::write(&config_path, r#"{"theme": "light", "darkness": 10}"#).unwrap();

    std::env::set_var("ICONLINE_THEME", "rose-pine");
    std::env::set_var("ICONLINE_PLAIN_COLOR", "white");
    std::env::set_var("ICONLINE_DESATURATION", "12.5");
    std::env::set_var("ICONLINE_DARKNESS", "very dark");

    let config = load_config(Some(config_path)).unwrap();
    clear_overrides();

    assert_eq!(config.theme, "rose-pine");
    assert_eq!(config.plain_color.as_deref(), Some("white"));
    assert_eq!(config.desaturation, Some(12.5));
    // unparseable number keeps the file value
    assert_eq!(config.darkness, Some(10.0));
}

#[test]
fn test_non_finite_env_numbers_are_ignored() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("iconline.json");
    fs::write(&config_path, r#"{"darkness": 10, "desaturation": 30}"#).unwrap();

    std::env::set_var("ICONLINE_DARKNESS", "NaN");
    std::env::set_var("ICONLINE_DESATURATION", "inf");

    let config = load_config(Some(config_path)).unwrap();
    clear_overrides();

    assert_eq!(config.darkness, Some(10.0));
    assert_eq!(config.desaturation, Some(30.0));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.json");
    fs::write(&config_path, "{ not json").unwrap();

    let err = load_config(Some(config_path)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IconlineError>(),
        Some(IconlineError::ConfigParse { .. })
    ));

    let missing = load_config(Some(temp_dir.path().join("missing.json"))).unwrap_err();
    assert!(matches!(
        missing.downcast_ref::<IconlineError>(),
        Some(IconlineError::ConfigRead { .. })
    ));
}

#[test]
fn test_search_paths_start_in_current_directory() {
    let paths = get_config_search_paths();
    assert_eq!(paths[0], std::path::PathBuf::from(".iconline.json"));
}

#[test]
fn test_invalid_configured_color_fails_definition() {
    let config = Config {
        cool_color: Some("not-a-color".to_string()),
        ..Config::default()
    };

    let err = Modeline::with_builtins(config).unwrap_err();
    assert!(matches!(err, IconlineError::InvalidColor(ref spec) if spec == "not-a-color"));
}

#[test]
fn test_config_transform_reaches_inactive_faces() {
    let config = Config {
        darkness: Some(5.0),
        desaturation: Some(0.0),
        ..Config::default()
    };
    let modeline = Modeline::with_builtins(config.clone()).unwrap();

    let plain = Color::parse(&config.palette().plain).unwrap();
    let inactive = modeline.faces().get(&FaceId::inactive("plain")).unwrap();
    assert_eq!(inactive.foreground, Some(plain.darken(5.0).desaturate(0.0)));
}
