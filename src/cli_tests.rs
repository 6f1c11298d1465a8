// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for command-line parsing

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use crate::options::{DnsServiceOptions, HealthOptions};
    use crate::switches::controller_switches;
    use clap::{CommandFactory, Parser};
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shoot-dns-service").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = parse(&[]);

        assert_eq!(cli.dns, DnsServiceOptions::default());
        assert_eq!(cli.health, HealthOptions::default());
        assert_eq!(cli.dns.dns_class, "garden");
        assert_eq!(cli.health.health_check_sync_period, Duration::from_secs(30));
        assert!(cli.switches.disable_controllers.is_empty());
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--seed-id",
            "aws-eu1",
            "--dns-class",
            "internal",
            "--manage-dns-providers",
            "--replicate-dns-providers=true",
            "--enable-owner-dns-activation=false",
            "--remote-default-domain-secret",
            "garden/default-domain",
            "--healthcheck-sync-period",
            "1m30s",
            "--disable-controllers",
            "healthcheck_controller",
        ]);

        assert_eq!(cli.dns.seed_id, "aws-eu1");
        assert_eq!(cli.dns.dns_class, "internal");
        assert!(cli.dns.manage_dns_providers);
        assert!(cli.dns.replicate_dns_providers);
        assert!(!cli.dns.owner_dns_activation);
        assert_eq!(cli.dns.remote_default_domain_secret, "garden/default-domain");
        assert_eq!(cli.health.health_check_sync_period, Duration::from_secs(90));
        assert_eq!(
            cli.switches.disable_controllers,
            vec!["healthcheck_controller".to_string()]
        );
    }

    #[test]
    fn test_disable_controllers_comma_separated() {
        let cli = parse(&["--disable-controllers=a,b"]);
        assert_eq!(cli.switches.disable_controllers, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_duration_is_a_parse_error() {
        let result = Cli::try_parse_from(["shoot-dns-service", "--healthcheck-sync-period", "soon"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_complete_and_apply() {
        let cli = parse(&[
            "--seed-id=seed-a",
            "--remote-default-domain-secret=kube-system/my-secret",
            "--healthcheck-sync-period=45s",
        ]);
        let startup = cli.complete(&controller_switches()).unwrap();
        let config = startup.controller_config();

        assert_eq!(config.dns.seed_id, "seed-a");
        let secret = config.dns.remote_default_domain_secret.unwrap();
        assert_eq!(secret.namespace, "kube-system");
        assert_eq!(secret.name, "my-secret");
        assert_eq!(
            config.health_check.sync_period.duration(),
            Duration::from_secs(45)
        );
    }

    #[test]
    fn test_complete_fails_on_bad_secret() {
        let cli = parse(&["--remote-default-domain-secret=bad-format"]);
        let err = cli.complete(&controller_switches()).unwrap_err();
        assert!(err.to_string().contains("bad-format"));
    }

    #[test]
    fn test_controllers_respect_disabled_switches() {
        let cli = parse(&["--disable-controllers=shoot_dns_service_lifecycle_controller"]);
        let controllers = cli
            .complete(&controller_switches())
            .unwrap()
            .controllers()
            .unwrap();

        let names: Vec<&str> = controllers
            .controllers()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "shoot_dns_service_replication_controller",
                "healthcheck_controller"
            ]
        );
    }
}
