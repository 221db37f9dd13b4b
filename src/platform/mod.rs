//! Platform-specific keep-awake dispatch
//!
//! The host OS is resolved once at startup into a closed set of variants,
//! each carrying the launch specification of its native "reset the idle
//! timer" command.

use tokio::process::Command;
use tracing::debug;

/// PowerShell one-liner calling SetThreadExecutionState with
/// ES_CONTINUOUS | ES_SYSTEM_REQUIRED | ES_DISPLAY_REQUIRED (0x80000003).
const WINDOWS_KEEP_AWAKE_SCRIPT: &str = concat!(
    "Add-Type -TypeDefinition 'using System; using System.Runtime.InteropServices; ",
    "public class Awake { [DllImport(\"kernel32.dll\")] ",
    "public static extern uint SetThreadExecutionState(uint esFlags); }'; ",
    "[Awake]::SetThreadExecutionState([uint32]\"0x80000003\")",
);

/// Host platform, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Unsupported(String),
}

impl Platform {
    /// Resolve the platform from the running operating system
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform variant. Pure; `detect` calls this
    /// with `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Program and arguments of the native keep-awake command, or `None` for
    /// an unsupported platform
    pub fn launch_spec(&self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            // Hold an idle-sleep assertion for 60 seconds; the refresh tick
            // re-arms it well before it lapses.
            Platform::MacOs => Some(("caffeinate", &["-i", "-t", "60"])),
            Platform::Windows => Some(("powershell", &["-Command", WINDOWS_KEEP_AWAKE_SCRIPT])),
            Platform::Linux => Some(("xdg-screensaver", &["reset"])),
            Platform::Unsupported(_) => None,
        }
    }

    /// Launch the native keep-awake command and return without waiting for it.
    ///
    /// The action is advisory: the spawned process is detached and its outcome
    /// is ignored, the next refresh tick re-launches it regardless. On an
    /// unsupported platform there is no safe fallback, so this terminates the
    /// whole process with a failure status.
    pub fn keep_awake(&self) {
        if let Platform::Unsupported(os) = self {
            eprintln!("Unsupported operating system: {}", os);
            std::process::exit(1);
        }
        // Supported variants always carry a launch spec.
        let Some((program, args)) = self.launch_spec() else { return };

        match Command::new(program).args(args).spawn() {
            Ok(child) => drop(child),
            Err(e) => debug!("Failed to launch {}: {}", program, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_maps_known_identifiers() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
    }

    #[test]
    fn test_from_os_preserves_unknown_identifier() {
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Unsupported("freebsd".to_string())
        );
    }

    #[test]
    fn test_launch_spec_for_supported_platforms() {
        let (program, args) = Platform::MacOs.launch_spec().unwrap();
        assert_eq!(program, "caffeinate");
        assert_eq!(args, ["-i", "-t", "60"]);

        let (program, _) = Platform::Windows.launch_spec().unwrap();
        assert_eq!(program, "powershell");

        let (program, args) = Platform::Linux.launch_spec().unwrap();
        assert_eq!(program, "xdg-screensaver");
        assert_eq!(args, ["reset"]);
    }

    #[test]
    fn test_unsupported_has_no_launch_spec() {
        assert!(Platform::Unsupported("plan9".to_string()).launch_spec().is_none());
    }
}
