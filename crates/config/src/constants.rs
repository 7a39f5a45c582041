//! Built-in values for the MT5 Alert Android project layout
//!
//! Every path below is relative to the project root. The empty path is the
//! root itself.

pub const DEFAULT_ROOT: &str = "MT5AlertApp";
pub const DEFAULT_TITLE: &str = "MT5 Alert";

pub const DIRECTORIES: &[(&str, &str)] = &[
    ("", "Project root directory"),
    ("app", "App module directory"),
    ("app/src/main/java/com/mt5alert/app", "Main package directory"),
    ("app/src/main/res", "Resources directory"),
    ("gradle/wrapper", "Gradle wrapper directory"),
];

pub const BUILD_FILES: &[(&str, &str)] = &[
    ("build.gradle", "Project build.gradle"),
    ("app/build.gradle", "App build.gradle"),
    ("settings.gradle", "Settings.gradle"),
    ("gradle.properties", "Gradle properties"),
    (
        "gradle/wrapper/gradle-wrapper.properties",
        "Gradle wrapper properties",
    ),
];

pub const APP_FILES: &[(&str, &str)] = &[
    ("app/src/main/AndroidManifest.xml", "Android Manifest"),
    (
        "app/src/main/java/com/mt5alert/app/MainActivity.kt",
        "Main Activity",
    ),
    (
        "app/src/main/java/com/mt5alert/app/WebSocketForegroundService.kt",
        "WebSocket Service",
    ),
    (
        "app/src/main/java/com/mt5alert/app/BootReceiver.kt",
        "Boot Receiver",
    ),
];

pub const RESOURCE_FILES: &[(&str, &str)] = &[
    ("app/src/main/res/layout/activity_main.xml", "Main layout"),
    ("app/src/main/res/values/strings.xml", "String resources"),
    ("app/src/main/res/values/colors.xml", "Color resources"),
    ("app/src/main/res/values/themes.xml", "Theme resources"),
    (
        "app/src/main/res/drawable/ic_notification.xml",
        "Notification icon",
    ),
];

pub const SOURCE_TREE: &str = "app/src/main/java";
pub const SOURCE_EXTENSION: &str = "kt";
pub const SOURCE_LANGUAGE: &str = "Kotlin";

pub const MANIFEST: &str = "app/src/main/AndroidManifest.xml";

pub const REQUIRED_PERMISSIONS: &[&str] = &[
    "android.permission.INTERNET",
    "android.permission.FOREGROUND_SERVICE",
    "android.permission.WAKE_LOCK",
];
