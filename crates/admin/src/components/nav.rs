//! Navigation shell: the side menu and the active section.
//!
//! The active section is whatever page is being rendered; nothing about the
//! menu is stored between requests.

use crate::state::AppState;

/// A side-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Inventory,
    Orders,
    Customers,
    Promotions,
    WhatsApp,
    Analytics,
    Settings,
}

impl Section {
    /// Menu order.
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Inventory,
        Self::Orders,
        Self::Customers,
        Self::Promotions,
        Self::WhatsApp,
        Self::Analytics,
        Self::Settings,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Inventory => "inventory",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::Promotions => "promotions",
            Self::WhatsApp => "whatsapp",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Orders => "Orders",
            Self::Customers => "Customers",
            Self::Promotions => "Promotions",
            Self::WhatsApp => "WhatsApp",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Inventory => "/inventory",
            Self::Orders => "/orders",
            Self::Customers => "/customers",
            Self::Promotions => "/promotions",
            Self::WhatsApp => "/whatsapp",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
        }
    }

    /// Look up a section by its id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Resolve a menu selection; unknown ids land on the dashboard.
    #[must_use]
    pub fn select(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::Dashboard)
    }

    /// Sections that only have a "Coming Soon" page.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Promotions | Self::Analytics | Self::Settings)
    }
}

/// A menu entry as rendered.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Everything the page layout needs besides the section content.
#[derive(Debug, Clone)]
pub struct ShellView {
    pub store_name: String,
    /// First letter of the store name, shown in the logo tile.
    pub store_initial: String,
    pub nav: Vec<NavItem>,
    pub active_label: &'static str,
}

impl ShellView {
    #[must_use]
    pub fn new(state: &AppState, active: Section) -> Self {
        Self::for_store(&state.config().store_name, active)
    }

    #[must_use]
    pub fn for_store(store_name: &str, active: Section) -> Self {
        let nav = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                id: section.id(),
                label: section.label(),
                path: section.path(),
                active: section == active,
            })
            .collect();

        Self {
            store_name: store_name.to_string(),
            store_initial: store_name.chars().take(1).collect(),
            nav,
            active_label: active.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_item() {
        for section in Section::ALL {
            let shell = ShellView::for_store("MISS Accessories", section);
            let active: Vec<&NavItem> = shell.nav.iter().filter(|item| item.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, section.id());
        }
    }

    #[test]
    fn test_select_unknown_falls_back_to_dashboard() {
        assert_eq!(Section::select("orders"), Section::Orders);
        assert_eq!(Section::select("reports"), Section::Dashboard);
        assert_eq!(Section::select(""), Section::Dashboard);
    }

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_store_initial() {
        let shell = ShellView::for_store("MISS Accessories", Section::Dashboard);
        assert_eq!(shell.store_initial, "M");
        assert_eq!(shell.active_label, "Dashboard");
    }
}
