use clap::Parser;
use phishscan::cli::{Cli, Commands};

#[test]
fn test_bare_url_shortcut() {
    let cli = Cli::try_parse_from(["phishscan", "example.com"]).unwrap();
    assert_eq!(cli.url.as_deref(), Some("example.com"));
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn test_check_subcommand() {
    let cli = Cli::try_parse_from(["phishscan", "check", "https://example.com/login"]).unwrap();
    match cli.command {
        Some(Commands::Check(args)) => {
            assert_eq!(args.url, "https://example.com/login");
        }
        _ => panic!("expected check subcommand"),
    }
}

#[test]
fn test_batch_subcommand_defaults() {
    let cli = Cli::try_parse_from(["phishscan", "batch", "urls.txt"]).unwrap();
    match cli.command {
        Some(Commands::Batch(args)) => {
            assert_eq!(args.file.to_str(), Some("urls.txt"));
            assert_eq!(args.parallel, 4);
            assert!(!args.issues_only);
        }
        _ => panic!("expected batch subcommand"),
    }
}

#[test]
fn test_batch_parallel_override() {
    let cli = Cli::try_parse_from(["phishscan", "batch", "urls.txt", "--parallel", "8"]).unwrap();
    match cli.command {
        Some(Commands::Batch(args)) => assert_eq!(args.parallel, 8),
        _ => panic!("expected batch subcommand"),
    }
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from([
        "phishscan",
        "--json",
        "--no-color",
        "--timeout",
        "3",
        "--skip-age",
        "example.com",
    ])
    .unwrap();
    assert!(cli.json);
    assert!(cli.no_color);
    assert_eq!(cli.timeout, Some(3));
    assert!(cli.skip_age);
    assert!(!cli.skip_reputation);
    assert!(!cli.skip_certificate);
}

#[test]
fn test_check_requires_url() {
    assert!(Cli::try_parse_from(["phishscan", "check"]).is_err());
}

#[test]
fn test_no_arguments_is_valid() {
    let cli = Cli::try_parse_from(["phishscan"]).unwrap();
    assert!(cli.url.is_none());
    assert!(cli.command.is_none());
}
