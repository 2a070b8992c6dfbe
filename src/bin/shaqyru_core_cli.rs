use shaqyru_core::catalog::CategoryCatalog;
use shaqyru_core::cli::runner::WizardRunner;
use shaqyru_core::cli::{output, CliError};
use shaqyru_core::config::ConfigManager;
use shaqyru_core::i18n::Translations;
use shaqyru_core::submit::{HttpApi, RedirectTarget, SubmissionService};
use shaqyru_core::wizard::WizardController;

fn main() {
    shaqyru_core::init();
    if let Err(err) = run() {
        output::error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let translations = Translations::new();
    let catalog = CategoryCatalog::global();

    // `--update <site-id>` switches the final call to update semantics.
    let existing_site_id = parse_update_arg();

    let runner = WizardRunner::new(&translations, config.language.clone());
    let entry = runner.choose_entry(&config, catalog, existing_site_id)?;
    let mut controller = WizardController::new(catalog, &entry);
    runner.collect(&mut controller)?;

    let api = HttpApi::new(&config.api_base_url, config.access_token.clone())?;
    let service = SubmissionService::new(api.clone(), api);

    output::info(translations.get(&config.language, "submit.in_progress"));
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(service.submit(controller.state(), catalog, &entry))?;
    controller.mark_submitted();

    output::success(translations.get(&config.language, "submit.done"));
    match outcome.redirect {
        RedirectTarget::ImageSelection {
            site_id,
            category_route,
            tariff,
        } => output::info(format!(
            "Суреттерді таңдау: https://shaqyru24.kz/images?site={site_id}&category={category_route}&tariff={tariff}"
        )),
        RedirectTarget::WhatsappDelivery {
            site_id,
            category_route,
            tariff,
        } => output::info(format!(
            "WhatsApp арқылы жіберу: https://shaqyru24.kz/whatsapp?site={site_id}&category={category_route}&tariff={tariff}"
        )),
    }
    Ok(())
}

fn parse_update_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--update" {
            return args.next();
        }
    }
    None
}
