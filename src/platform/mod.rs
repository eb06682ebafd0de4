//! Platform detection module
//!
//! This module provides abstractions for detecting the current platform
//! (OS and shared-library suffix) so that toolchain-facing output such as
//! the shared library filename can be derived for the host system.

/// Platform information for toolchain-facing output
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub shared_lib_suffix: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            shared_lib_suffix: Self::detect_shared_lib_suffix(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "macos".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_shared_lib_suffix() -> String {
        #[cfg(target_os = "macos")]
        {
            ".dylib".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            ".so".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            ".dll".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::DLL_SUFFIX.to_string()
        }
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Platform;
}

/// Default platform detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> Platform {
        Platform::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        // Should return non-empty strings
        assert!(!platform.os.is_empty());
        assert!(!platform.shared_lib_suffix.is_empty());

        // On known platforms, verify expected values
        #[cfg(target_os = "macos")]
        assert_eq!(platform.shared_lib_suffix, ".dylib");

        #[cfg(target_os = "linux")]
        assert_eq!(platform.shared_lib_suffix, ".so");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.shared_lib_suffix, ".dll");
    }

    #[test]
    fn test_suffix_matches_std_consts() {
        // The detected suffix must agree with what the compiler reports for
        // the host, whatever the host is.
        let platform = Platform::detect();
        assert_eq!(platform.shared_lib_suffix, std::env::consts::DLL_SUFFIX);
    }

    #[test]
    fn test_default_platform_detector() {
        let detector = DefaultPlatformDetector;
        let platform = detector.detect();

        assert_eq!(platform, Platform::detect());
    }

    #[test]
    fn test_platform_clone_and_eq() {
        let p1 = Platform {
            os: "linux".into(),
            shared_lib_suffix: ".so".into(),
        };
        let p2 = p1.clone();

        assert_eq!(p1, p2);
    }
}
