//! Type definitions for the application state.
//!
//! - [`View`] - which screen is displayed
//! - [`HomeCard`] - the menu cards on the home screen

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Schedule,
    Events,
    Faq,
}

impl View {
    /// Nav bar order.
    pub const ALL: [View; 4] = [View::Home, View::Schedule, View::Events, View::Faq];

    /// Nav bar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Início",
            View::Schedule => "Salas",
            View::Events => "Eventos",
            View::Faq => "FAQ",
        }
    }

    pub fn position(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> View {
        View::ALL[(self.position() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.position() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Menu cards on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCard {
    Schedule,
    Events,
    Faq,
}

impl HomeCard {
    pub const ALL: [HomeCard; 3] = [HomeCard::Schedule, HomeCard::Events, HomeCard::Faq];

    pub fn title(self) -> &'static str {
        match self {
            HomeCard::Schedule => "Consultar Salas",
            HomeCard::Events => "Eventos",
            HomeCard::Faq => "Dúvidas",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            HomeCard::Schedule => "Encontre sua sala e professor",
            HomeCard::Events => "Fique por dentro do que acontece",
            HomeCard::Faq => "Perguntas frequentes e suporte",
        }
    }

    /// Screen the card opens.
    pub fn target(self) -> View {
        match self {
            HomeCard::Schedule => View::Schedule,
            HomeCard::Events => View::Events,
            HomeCard::Faq => View::Faq,
        }
    }
}
