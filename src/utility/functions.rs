//! The functions
//!
use std::{collections::HashMap, env, fs, io::Write, time::Duration};
use anyhow::{Context, Result};
use log::*;
use crate::shell::DEFAULT_SHELL;

pub const ENV_HOSTS: &str = "MONGOCONF_HOSTS";
pub const ENV_SHELL: &str = "MONGOCONF_SHELL";
pub const ENV_HTTP_TIMEOUT: &str = "MONGOCONF_HTTP_TIMEOUT";

/// The host specifications: the positional arguments, or the comma separated list in MONGOCONF_HOSTS.
/// No hosts is a valid result.
pub fn set_hosts(
    option: &[String],
    changed_options: &mut HashMap<&str, String>,
) -> Vec<String>
{
    if !option.is_empty() {
        info!("hosts argument set: using: {}", option.join(","));
        changed_options.insert(ENV_HOSTS, option.join(","));
        return option.to_vec();
    }
    match env::var(ENV_HOSTS) {
        Ok(set_var) => {
            info!("hosts not set: set via .env: {}: {}", ENV_HOSTS, set_var);
            changed_options.insert(ENV_HOSTS, set_var.to_owned());
            split_list(&set_var)
        }
        Err(_e) => {
            info!("hosts not set: and not set via .env: no hosts");
            Vec::new()
        }
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn set_shell(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    match option {
        Some(shell) => {
            info!("shell argument set: using: {}", shell);
            changed_options.insert(ENV_SHELL, shell.to_string());
            shell.to_string()
        }
        None => match env::var(ENV_SHELL) {
            Ok(set_var) => {
                info!("shell not set: set via .env: {}: {}", ENV_SHELL, set_var);
                changed_options.insert(ENV_SHELL, set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("shell not set: and not set via .env: using DEFAULT_SHELL: {}", DEFAULT_SHELL);
                DEFAULT_SHELL.to_string()
            }
        },
    }
}

/// The http timeout in seconds. None means the http client default.
pub fn set_http_timeout(
    option: &Option<u64>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<Option<Duration>>
{
    let seconds = match option {
        Some(seconds) => {
            info!("http timeout argument set: using: {}", seconds);
            changed_options.insert(ENV_HTTP_TIMEOUT, seconds.to_string());
            Some(*seconds)
        }
        None => match env::var(ENV_HTTP_TIMEOUT) {
            Ok(set_var) => {
                info!("http timeout not set: set via .env: {}: {}", ENV_HTTP_TIMEOUT, set_var);
                let seconds = set_var.trim().parse::<u64>()
                    .with_context(|| format!("Invalid {}: {}", ENV_HTTP_TIMEOUT, set_var))?;
                changed_options.insert(ENV_HTTP_TIMEOUT, set_var.to_owned());
                Some(seconds)
            }
            Err(_e) => {
                info!("http timeout not set: and not set via .env: using the http client default");
                None
            }
        },
    };
    Ok(seconds.map(Duration::from_secs))
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "Error writing .env file: .env")?;

        for (key, value) in changed_options {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[test]
    fn unit_split_list() {
        assert_eq!(split_list("a:1:2, b:1:2,,c:1:2 "), vec!["a:1:2", "b:1:2", "c:1:2"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn unit_set_hosts_argument_wins() {
        let mut changed_options = HashMap::new();
        let hosts = set_hosts(&["a:1:2".to_string(), "b:1:2".to_string()], &mut changed_options);
        assert_eq!(hosts, vec!["a:1:2", "b:1:2"]);
        assert_eq!(changed_options.get(ENV_HOSTS).map(|s| s.as_str()), Some("a:1:2,b:1:2"));
    }

    #[test]
    fn unit_set_shell_argument_wins() {
        let mut changed_options = HashMap::new();
        let shell = set_shell(&Some("/usr/bin/mongosh".to_string()), &mut changed_options);
        assert_eq!(shell, "/usr/bin/mongosh");
        assert_eq!(changed_options.len(), 1);
    }

    #[test]
    fn unit_set_http_timeout_argument_wins() {
        let mut changed_options = HashMap::new();
        let timeout = set_http_timeout(&Some(5), &mut changed_options).unwrap();
        assert_eq!(timeout, Some(Duration::from_secs(5)));
        assert_eq!(changed_options.get(ENV_HTTP_TIMEOUT).map(|s| s.as_str()), Some("5"));
    }

    // the environment is shared by all tests in the process.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn unit_set_hosts_from_env() {
        let _guard = env_lock();
        env::set_var(ENV_HOSTS, "a:27017:28017, b:27018:28018");
        let mut changed_options = HashMap::new();
        let hosts = set_hosts(&[], &mut changed_options);
        env::remove_var(ENV_HOSTS);
        assert_eq!(hosts, vec!["a:27017:28017", "b:27018:28018"]);
        assert_eq!(changed_options.get(ENV_HOSTS).map(|s| s.as_str()), Some("a:27017:28017, b:27018:28018"));
    }

    #[test]
    fn unit_set_hosts_default_is_empty() {
        let _guard = env_lock();
        env::remove_var(ENV_HOSTS);
        let mut changed_options = HashMap::new();
        assert!(set_hosts(&[], &mut changed_options).is_empty());
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_set_shell_from_env() {
        let _guard = env_lock();
        env::set_var(ENV_SHELL, "mongosh");
        let mut changed_options = HashMap::new();
        let shell = set_shell(&None, &mut changed_options);
        env::remove_var(ENV_SHELL);
        assert_eq!(shell, "mongosh");
        assert_eq!(changed_options.get(ENV_SHELL).map(|s| s.as_str()), Some("mongosh"));
    }

    #[test]
    fn unit_set_shell_default() {
        let _guard = env_lock();
        env::remove_var(ENV_SHELL);
        let mut changed_options = HashMap::new();
        assert_eq!(set_shell(&None, &mut changed_options), "mongo");
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_set_http_timeout_from_env() {
        let _guard = env_lock();
        env::set_var(ENV_HTTP_TIMEOUT, " 7 ");
        let mut changed_options = HashMap::new();
        let timeout = set_http_timeout(&None, &mut changed_options);
        env::remove_var(ENV_HTTP_TIMEOUT);
        assert_eq!(timeout.unwrap(), Some(Duration::from_secs(7)));
        assert_eq!(changed_options.get(ENV_HTTP_TIMEOUT).map(|s| s.as_str()), Some(" 7 "));
    }

    #[test]
    fn unit_set_http_timeout_default() {
        let _guard = env_lock();
        env::remove_var(ENV_HTTP_TIMEOUT);
        let mut changed_options = HashMap::new();
        assert_eq!(set_http_timeout(&None, &mut changed_options).unwrap(), None);
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_set_http_timeout_invalid_env() {
        let _guard = env_lock();
        env::set_var(ENV_HTTP_TIMEOUT, "soon");
        let mut changed_options = HashMap::new();
        let timeout = set_http_timeout(&None, &mut changed_options);
        env::remove_var(ENV_HTTP_TIMEOUT);
        let error = timeout.unwrap_err();
        assert_eq!(error.to_string(), "Invalid MONGOCONF_HTTP_TIMEOUT: soon");
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_argument_wins_over_env() {
        let _guard = env_lock();
        env::set_var(ENV_SHELL, "mongosh");
        env::set_var(ENV_HTTP_TIMEOUT, "soon");
        let mut changed_options = HashMap::new();
        let shell = set_shell(&Some("mongo".to_string()), &mut changed_options);
        let timeout = set_http_timeout(&Some(2), &mut changed_options);
        env::remove_var(ENV_SHELL);
        env::remove_var(ENV_HTTP_TIMEOUT);
        assert_eq!(shell, "mongo");
        assert_eq!(timeout.unwrap(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn unit_dotenv_writer_does_nothing_when_disabled() {
        let mut changed_options = HashMap::new();
        changed_options.insert(ENV_SHELL, "mongo".to_string());
        dotenv_writer(false, changed_options).unwrap();
    }
}
