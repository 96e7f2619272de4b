use std::path::PathBuf;

use sd_cmd::registry::{BinaryLocation, CommandFormat, CommandSpec};

/// Build a `CommandSpec` for a binary command resolved to `path`.
pub fn binary_spec(
    namespace: &str,
    name: &str,
    version: &str,
    path: impl Into<PathBuf>,
) -> CommandSpec {
    CommandSpec {
        namespace: namespace.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        format: CommandFormat::Binary {
            binary: BinaryLocation { path: path.into() },
        },
    }
}

/// Build a `CommandSpec` with a format that has no executor.
pub fn spec_with_format(
    namespace: &str,
    name: &str,
    version: &str,
    format: CommandFormat,
) -> CommandSpec {
    CommandSpec {
        namespace: namespace.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        format,
    }
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &std::path::Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod script");
    path
}
