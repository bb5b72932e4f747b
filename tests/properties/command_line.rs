//! Every generated rsync command carries the fixed mirror flags.

use proptest::prelude::*;
use sitepush::config::DeployConfig;
use sitepush::{DeployOptions, DeployPlan, RsyncTransfer};
use std::path::PathBuf;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

proptest! {
    #[test]
    fn fixed_flags_always_present(
        port in 1u16..=u16::MAX,
        source in "[a-zA-Z0-9_./-]{0,24}",
        user in word(),
        host in word(),
        remote_path in "/[a-z0-9/_-]{0,24}",
        dry_run in any::<bool>(),
        itemize in any::<bool>(),
    ) {
        let config = DeployConfig {
            user: user.clone(),
            host: host.clone(),
            port,
            remote_path: remote_path.clone(),
            source: PathBuf::from(&source),
        };
        let options = DeployOptions { dry_run, itemize, quiet: false };
        let plan = DeployPlan::from_config(&config, &options).unwrap();
        let args: Vec<String> = RsyncTransfer::command_line(&plan.source, &plan.destination, &plan.mirror)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        prop_assert_eq!(&args[0], "-e");
        prop_assert_eq!(&args[1], &format!("ssh -p {}", port));
        for flag in ["-z", "-r", "-c", "--delete"] {
            prop_assert!(args.iter().any(|a| a == flag), "missing {}", flag);
        }
        prop_assert_eq!(args.iter().any(|a| a == "--dry-run"), dry_run);
        prop_assert_eq!(args.iter().any(|a| a == "--itemize-changes"), itemize);

        let destination = &args[args.len() - 1];
        prop_assert_eq!(destination, &format!("{}@{}:{}", user, host, remote_path));

        let source_arg = &args[args.len() - 2];
        prop_assert!(source_arg.ends_with('/'));
        prop_assert!(!source_arg.ends_with("//"));
    }

    #[test]
    fn positional_arguments_never_look_like_options(
        source in "-{0,2}[a-z0-9_.-]{0,16}/?",
        user in "-?[a-z][a-z0-9-]{0,8}",
        host in "-?[a-z][a-z0-9.-]{0,12}",
    ) {
        let config = DeployConfig {
            user: user.clone(),
            host: host.clone(),
            source: PathBuf::from(&source),
            ..DeployConfig::default()
        };

        match DeployPlan::from_config(&config, &DeployOptions::default()) {
            Ok(plan) => {
                let args = RsyncTransfer::command_line(&plan.source, &plan.destination, &plan.mirror);
                for arg in &args[args.len() - 2..] {
                    let arg = arg.to_string_lossy();
                    prop_assert!(!arg.starts_with('-'), "positional argument {:?}", arg);
                }
            }
            Err(_) => prop_assert!(user.starts_with('-') || host.starts_with('-')),
        }
    }

    #[test]
    fn source_contents_arg_keeps_prefix(source in "[a-z0-9_.][a-z0-9_.-]{0,15}(/[a-z0-9_.-]{1,16}){0,3}/{0,3}") {
        let arg = sitepush::SourceDir::new(&source).contents_arg().to_string_lossy().into_owned();
        prop_assert_eq!(arg, format!("{}/", source.trim_end_matches('/')));
    }
}
