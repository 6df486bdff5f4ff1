#![allow(dead_code)]

use navrouter::route::{PresentationType, Route, TransitionHint};

/// Route type shared by the integration tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Profile { user_id: String },
    Settings,
    Checkout,
    Admin,
    Photo(u32),
    Help,
    Gallery,
}

impl Route for AppRoute {
    fn key(&self) -> String {
        match self {
            AppRoute::Home => "home".to_string(),
            AppRoute::Profile { user_id } => format!("profile_{user_id}"),
            AppRoute::Settings => "settings".to_string(),
            AppRoute::Checkout => "checkout".to_string(),
            AppRoute::Admin => "admin".to_string(),
            AppRoute::Photo(id) => format!("photo_{id}"),
            AppRoute::Help => "help".to_string(),
            AppRoute::Gallery => "gallery".to_string(),
        }
    }

    fn presentation(&self) -> PresentationType {
        match self {
            AppRoute::Settings => PresentationType::Sheet,
            AppRoute::Photo(_) => PresentationType::FullScreenCover,
            AppRoute::Help => PresentationType::Popover,
            AppRoute::Gallery => PresentationType::Custom(TransitionHint::new("zoom")),
            _ => PresentationType::Push,
        }
    }
}

pub fn profile(user_id: &str) -> AppRoute {
    AppRoute::Profile {
        user_id: user_id.to_string(),
    }
}
