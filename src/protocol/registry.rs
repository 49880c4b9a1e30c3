//! The ordered table of protocol message shapes.

use once_cell::sync::Lazy;

use crate::response::{ATTACK_TRANSFER, PLACE_ARMIES};

use super::pattern::{Capture, Item, ItemPattern, Pattern, TokenClass};

/// Which internal handler a route feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    SetupSuperRegions,
    SetupRegions,
    SetupNeighbors,
    SettingsYourBot,
    SettingsOpponentBot,
    SettingsStartingArmies,
    UpdateMap,
    OpponentMoves,
    PickStartingRegions,
    GoPlaceArmies,
    GoAttackTransfer,
}

/// Data extracted from a matched line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload<'a> {
    /// The captured group, for routes without an item pattern.
    Text(&'a str),
    /// Records extracted by the route's item pattern, in line order.
    Items(Vec<Item<'a>>),
}

/// A matched line ready to be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch<'a> {
    pub kind: MessageKind,
    pub payload: Payload<'a>,
}

/// One registry row.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub kind: MessageKind,
    pub pattern: Pattern,
    pub items: Option<ItemPattern>,
}

impl Route {
    /// Try this route against `line`.
    #[must_use]
    pub fn matches<'a>(&self, line: &'a str) -> Option<Dispatch<'a>> {
        let captured = self.pattern.capture(line)?;
        let payload = match self.items {
            Some(items) => Payload::Items(items.extract(captured)),
            None => Payload::Text(captured),
        };
        Some(Dispatch {
            kind: self.kind,
            payload,
        })
    }
}

/// Ordered routes; the first match wins.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    routes: Vec<Route>,
}

/// Collects routes in registration order.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    routes: Vec<Route>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn route(mut self, kind: MessageKind, pattern: Pattern) -> Self {
        self.routes.push(Route {
            kind,
            pattern,
            items: None,
        });
        self
    }

    #[must_use]
    pub fn route_items(mut self, kind: MessageKind, pattern: Pattern, items: ItemPattern) -> Self {
        self.routes.push(Route {
            kind,
            pattern,
            items: Some(items),
        });
        self
    }

    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            routes: self.routes,
        }
    }
}

const REGION_REWARD: &[TokenClass] = &[TokenClass::Number, TokenClass::Number];
const REGION_NEIGHBOURS: &[TokenClass] = &[TokenClass::Number, TokenClass::NumberList];
const REGION_UPDATE: &[TokenClass] = &[TokenClass::Number, TokenClass::Name, TokenClass::Number];
const OPPONENT_MOVE: &[TokenClass] = &[
    TokenClass::Name,
    TokenClass::OneOf(&[PLACE_ARMIES, ATTACK_TRANSFER]),
    TokenClass::Number,
    TokenClass::Number,
];
const SINGLE_NUMBER: &[TokenClass] = &[TokenClass::Number];

static PROTOCOL: Lazy<Registry> = Lazy::new(|| {
    Registry::builder()
        .route_items(
            MessageKind::SetupSuperRegions,
            Pattern::new(&["setup_map", "super_regions"], Capture::Rest),
            ItemPattern::new(REGION_REWARD),
        )
        .route_items(
            MessageKind::SetupRegions,
            Pattern::new(&["setup_map", "regions"], Capture::Rest),
            ItemPattern::new(REGION_REWARD),
        )
        .route_items(
            MessageKind::SetupNeighbors,
            Pattern::new(&["setup_map", "neighbors"], Capture::Rest),
            ItemPattern::new(REGION_NEIGHBOURS),
        )
        .route(
            MessageKind::SettingsYourBot,
            Pattern::new(&["settings", "your_bot"], Capture::Word(TokenClass::Name)),
        )
        .route(
            MessageKind::SettingsOpponentBot,
            Pattern::new(&["settings", "opponent_bot"], Capture::Word(TokenClass::Name)),
        )
        .route(
            MessageKind::SettingsStartingArmies,
            Pattern::new(&["settings", "starting_armies"], Capture::Word(TokenClass::Number)),
        )
        .route_items(
            MessageKind::UpdateMap,
            Pattern::new(&["update_map"], Capture::Rest),
            ItemPattern::new(REGION_UPDATE),
        )
        .route_items(
            MessageKind::OpponentMoves,
            Pattern::new(&["opponent_moves"], Capture::Rest),
            ItemPattern::new(OPPONENT_MOVE),
        )
        .route_items(
            MessageKind::PickStartingRegions,
            Pattern::new(&["pick_starting_regions"], Capture::Rest),
            ItemPattern::new(SINGLE_NUMBER),
        )
        .route(
            MessageKind::GoPlaceArmies,
            Pattern::new(&["go", PLACE_ARMIES], Capture::Word(TokenClass::Number)),
        )
        .route(
            MessageKind::GoAttackTransfer,
            Pattern::new(&["go", ATTACK_TRANSFER], Capture::Word(TokenClass::Number)),
        )
        .build()
});

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The Warlight protocol table, built on first use.
    #[must_use]
    pub fn protocol() -> &'static Registry {
        &PROTOCOL
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching `line`.
    #[must_use]
    pub fn dispatch<'a>(&self, line: &'a str) -> Option<Dispatch<'a>> {
        self.routes.iter().find_map(|route| route.matches(line))
    }
}
