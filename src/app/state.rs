use crate::settings::SettingsDraft;

/// Transient per-run state shared across the menu flows. The settings draft
/// lives here for the duration of the process and is dropped at exit; it is
/// never written to disk.
#[derive(Default)]
pub struct SessionState {
    settings: Option<SettingsDraft>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> Option<&SettingsDraft> {
        self.settings.as_ref()
    }

    pub fn set_settings(&mut self, draft: SettingsDraft) {
        self.settings = Some(draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Region, DEFAULT_RESOURCE_GROUP};

    #[test]
    fn starts_without_settings() {
        let session = SessionState::new();
        assert!(session.settings().is_none());
    }

    #[test]
    fn keeps_the_latest_draft() {
        let mut session = SessionState::new();
        session.set_settings(SettingsDraft {
            subscription_id: "sub-1".to_string(),
            resource_group: DEFAULT_RESOURCE_GROUP.to_string(),
            region: Region::EastUs,
        });
        session.set_settings(SettingsDraft {
            subscription_id: "sub-2".to_string(),
            resource_group: "rg-prod".to_string(),
            region: Region::WestEurope,
        });

        let draft = session.settings().expect("settings present");
        assert_eq!(draft.subscription_id, "sub-2");
        assert_eq!(draft.region, Region::WestEurope);
    }
}
