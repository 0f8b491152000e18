//! Property-based tests for delegated argument construction.

use std::ffi::OsString;
use std::path::PathBuf;

use archivesvc_restart::domain::{EnvironmentName, InvocationRequest};
use proptest::prelude::*;

proptest! {
    /// Whatever single token is given, the manager sees it verbatim between
    /// the fixed flags.
    #[test]
    fn any_environment_token_is_forwarded_verbatim(env in "[^\\x00]{1,40}") {
        let request = InvocationRequest {
            environment: EnvironmentName::new(env.clone()),
            interpreter: PathBuf::from("/usr/bin/python"),
            entrypoint: PathBuf::from("/opt/tr/archivesvc/manager.py"),
        };
        let args = request.manager_args();
        prop_assert_eq!(args.len(), 7);
        prop_assert_eq!(&args[0], "--env");
        prop_assert_eq!(&args[1], &OsString::from(&env));
        prop_assert_eq!(&args[2..], &["restart", "--user", "tr", "--group", "tr"]);
    }
}
