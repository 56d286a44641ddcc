pub mod collect;
pub mod locator;
pub mod patcher;
pub mod record;

pub const BUILD_FILE: &str = "build.gradle";
