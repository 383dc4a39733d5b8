use crate::app::state::SessionState;
use crate::cli;
use crate::error::Result;
use crate::provision::{placeholder_notice, ProvisionRequest, Provisioner, ResourceType};
use crate::settings::{SettingsDraft, SettingsStore};
use crate::ui::{
    run_create_menu, run_main_menu, run_settings_form, CreateMenuAction, MenuAction,
};

/// Coordinates session state and the TUI flows. Provisioning backend and
/// settings store are optional seams; with neither wired in, every create
/// action and settings save prints its placeholder instead.
pub struct AppController {
    session: SessionState,
    provisioner: Option<Box<dyn Provisioner>>,
    store: Option<Box<dyn SettingsStore>>,
}

impl AppController {
    pub fn new(
        provisioner: Option<Box<dyn Provisioner>>,
        store: Option<Box<dyn SettingsStore>>,
    ) -> Self {
        Self {
            session: SessionState::new(),
            provisioner,
            store,
        }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            let action = run_main_menu(self.session.settings())?;
            log::debug!("main menu selected {:?}", action.route().title());

            match action {
                MenuAction::Create => self.handle_create()?,
                MenuAction::View => self.handle_view(),
                MenuAction::Settings => self.handle_settings()?,
                MenuAction::Exit => {
                    cli::show_goodbye();
                    return Ok(());
                }
            }
        }
    }

    fn handle_create(&mut self) -> Result<()> {
        match run_create_menu()? {
            CreateMenuAction::Resource(resource) => {
                for line in self.create_report(resource) {
                    println!("{}", line);
                }
            }
            CreateMenuAction::Back => {}
        }
        Ok(())
    }

    /// Lines printed after a resource type is chosen. Calls the provisioning
    /// backend when one exists; otherwise the placeholder notice.
    fn create_report(&self, resource: ResourceType) -> Vec<String> {
        let Some(backend) = &self.provisioner else {
            return vec![
                placeholder_notice(resource),
                "Coming soon with full Azure SDK integration!".to_string(),
            ];
        };

        let request = ProvisionRequest {
            resource,
            region: self.session.settings().map(|draft| draft.region),
            settings: self.session.settings().cloned(),
        };
        match backend.provision(&request) {
            Ok(receipt) => vec![format!(
                "Provisioned {}: {}",
                resource.slug(),
                receipt.resource_id
            )],
            Err(err) => vec![format!("Failed to provision {}: {}", resource.slug(), err)],
        }
    }

    fn handle_view(&self) {
        println!("Resource viewing not yet implemented.");
        println!("This will list all provisioned Azure resources.");
    }

    fn handle_settings(&mut self) -> Result<()> {
        match run_settings_form(self.session.settings())? {
            Some(draft) => {
                for line in self.settings_report(&draft) {
                    println!("{}", line);
                }
                self.session.set_settings(draft);
            }
            None => {
                log::debug!("settings form cancelled");
            }
        }
        Ok(())
    }

    /// Confirmation echo for a completed settings form. Saves through the
    /// store when one exists; the echoed values always follow.
    fn settings_report(&self, draft: &SettingsDraft) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.store {
            Some(store) => match store.save(draft) {
                Ok(()) => lines.push("Settings saved.".to_string()),
                Err(err) => lines.push(format!("Failed to save settings: {}", err)),
            },
            None => {
                lines.push("Settings saved (local storage not yet implemented)".to_string())
            }
        }
        lines.extend(draft.confirmation_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::{ProvisionError, ProvisionReceipt};
    use crate::settings::{Region, DEFAULT_RESOURCE_GROUP};

    struct FakeProvisioner {
        fail: bool,
    }

    impl Provisioner for FakeProvisioner {
        fn provision(
            &self,
            request: &ProvisionRequest,
        ) -> std::result::Result<ProvisionReceipt, ProvisionError> {
            if self.fail {
                return Err(ProvisionError::Unavailable("no backend".to_string()));
            }
            Ok(ProvisionReceipt {
                resource_id: format!("/resources/{}-0001", request.resource.slug()),
            })
        }
    }

    fn draft() -> SettingsDraft {
        SettingsDraft {
            subscription_id: "sub-123".to_string(),
            resource_group: DEFAULT_RESOURCE_GROUP.to_string(),
            region: Region::WestEurope,
        }
    }

    #[test]
    fn create_without_backend_prints_the_placeholder() {
        let controller = AppController::new(None, None);
        let lines = controller.create_report(ResourceType::Vm);
        assert_eq!(
            lines[0],
            "Infrastructure creation for vm not yet implemented."
        );
    }

    #[test]
    fn create_with_backend_reports_the_receipt() {
        let controller = AppController::new(Some(Box::new(FakeProvisioner { fail: false })), None);
        let lines = controller.create_report(ResourceType::Storage);
        assert_eq!(lines, vec!["Provisioned storage: /resources/storage-0001"]);
    }

    #[test]
    fn create_with_failing_backend_reports_the_error() {
        let controller = AppController::new(Some(Box::new(FakeProvisioner { fail: true })), None);
        let lines = controller.create_report(ResourceType::Database);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Failed to provision database"));
        assert!(lines[0].contains("no backend"));
    }

    #[test]
    fn settings_echo_without_store_mentions_missing_persistence() {
        let controller = AppController::new(None, None);
        let lines = controller.settings_report(&draft());
        assert_eq!(
            lines,
            vec![
                "Settings saved (local storage not yet implemented)",
                "Subscription: sub-123",
                "Resource Group: rg-infra-creator",
                "Region: westeurope",
            ]
        );
    }

    struct FakeStore;

    impl SettingsStore for FakeStore {
        fn save(&self, _draft: &SettingsDraft) -> Result<()> {
            Ok(())
        }

        fn load(&self) -> Result<Option<SettingsDraft>> {
            Ok(None)
        }
    }

    #[test]
    fn settings_echo_with_store_confirms_the_save() {
        let controller = AppController::new(None, Some(Box::new(FakeStore)));
        let lines = controller.settings_report(&draft());
        assert_eq!(lines[0], "Settings saved.");
        assert_eq!(lines[1], "Subscription: sub-123");
    }
}
