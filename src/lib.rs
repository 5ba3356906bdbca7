//! Parser for SSH client style configuration: `Host` sections with key/value directives.
//!
//! ```
//! let sections = sshconfig::parse_str("Host local # Local SSH\n    Port 2222\n").unwrap();
//!
//! assert_eq!(sections[0].name(), "local");
//! assert_eq!(sections[0].get("Port"), Some("2222"));
//! ```

mod ssh_config;

pub use self::ssh_config::*;
