use crate::provision::ResourceType;

/// Central routing types for the TUI flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRoute {
    MainMenu,
    CreateInfra,
    ViewResources,
    Settings,
    Exit,
}

impl UiRoute {
    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            UiRoute::MainMenu => "Main Menu",
            UiRoute::CreateInfra => "Create Infrastructure",
            UiRoute::ViewResources => "View Resources",
            UiRoute::Settings => "Settings",
            UiRoute::Exit => "Exit",
        }
    }
}

/// Navigation outcomes from the main menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    View,
    Settings,
    Exit,
}

impl MenuAction {
    /// Screen the selection routes to. The match is closed on purpose: a new
    /// menu entry must pick its route here or the build fails.
    pub fn route(self) -> UiRoute {
        match self {
            MenuAction::Create => UiRoute::CreateInfra,
            MenuAction::View => UiRoute::ViewResources,
            MenuAction::Settings => UiRoute::Settings,
            MenuAction::Exit => UiRoute::Exit,
        }
    }
}

/// Outcomes of the create-infrastructure menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMenuAction {
    Resource(ResourceType),
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selection_routes_to_its_screen() {
        assert_eq!(MenuAction::Create.route(), UiRoute::CreateInfra);
        assert_eq!(MenuAction::View.route(), UiRoute::ViewResources);
        assert_eq!(MenuAction::Settings.route(), UiRoute::Settings);
        assert_eq!(MenuAction::Exit.route(), UiRoute::Exit);
    }

    #[test]
    fn routes_have_titles() {
        let routes = [
            UiRoute::MainMenu,
            UiRoute::CreateInfra,
            UiRoute::ViewResources,
            UiRoute::Settings,
            UiRoute::Exit,
        ];
        for route in routes {
            assert!(!route.title().is_empty());
        }
    }
}
