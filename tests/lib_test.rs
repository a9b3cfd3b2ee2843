//! Library integration tests.

use folio::FolioError;

#[test]
fn error_types_are_public() {
    let err = FolioError::ContentNotFound {
        path: "me.yml".into(),
    };
    assert!(err.to_string().contains("me.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> folio::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use folio::cli::{Cli, Commands};

    let cli = Cli::parse_from(["folio", "content", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Content(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Content command");
    }
}

#[test]
fn links_are_opened_by_policy() {
    use folio::config::OpenPolicy;
    use folio::interpreter::Effect;
    use folio::links::{perform_effects, RecordingOpener};
    use folio::ui::MockUI;

    let effects = [Effect::OpenLink("https://example.com".into())];
    let mut opener = RecordingOpener::new();
    let mut ui = MockUI::new();
    ui.set_confirm_response("open_link", true);

    assert_eq!(perform_effects(&effects, OpenPolicy::Ask, &mut opener, &mut ui), 1);
    assert_eq!(opener.opened(), ["https://example.com"]);
}
