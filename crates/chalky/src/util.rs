/// A trait to abstract over the process environment.
///
/// Besides environment variables, the environment also includes the output of
/// external commands, since terminal capabilities may only be discoverable by
/// running a tool such as `tput`. Abstracting over both makes capability
/// detection testable.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try running the program with the arguments and capturing its standard
    /// output.
    fn run(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading a non-empty environment variable as a string.
    fn read_non_empty(&self, key: &str) -> Option<String> {
        self.read(key).ok().filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }

    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = std::process::Command::new(program)
            .args(args)
            .stderr(std::process::Stdio::null())
            .output()
            .ok()?;
        if output.status.success() {
            String::from_utf8(output.stdout).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
        outputs: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
                outputs: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }

        /// Set the fake output of the program.
        pub(crate) fn output(
            &mut self,
            program: impl AsRef<str>,
            stdout: impl AsRef<str>,
        ) -> &mut Self {
            self.outputs
                .insert(program.as_ref().to_string(), stdout.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }

        fn run(&self, program: &str, _args: &[&str]) -> Option<String> {
            self.outputs.get(program).cloned()
        }
    }

    #[test]
    fn test_fake_env() {
        let mut env = FakeEnv::new();
        env.set("TERM", "xterm").set("EMPTY", "").output("tput", "8\n");

        assert_eq!(env.read("TERM").ok(), Some("xterm".to_string()));
        assert_eq!(env.read("NOPE"), Err(std::env::VarError::NotPresent));
        assert_eq!(env.read_non_empty("EMPTY"), None);
        assert_eq!(env.run("tput", &["colors"]), Some("8\n".to_string()));
        assert_eq!(env.run("ls", &[]), None);
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
