#![allow(dead_code)]

const ROACH_VARS: [&str; 4] = ["ROACH_CONFIG", "ROACH_SEATS", "ROACH_SEED", "ROACH_AGENT"];

/// Clears every `ROACH_*` variable, applies `pairs`, and restores the
/// previous environment on drop.
pub struct EnvGuard {
    restores: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&'static str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in ROACH_VARS {
            restores.push((key, std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> Output {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = roach_cli::run(args.iter().copied(), &mut out, &mut err);
    Output {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
