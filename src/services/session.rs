use std::sync::Arc;

use super::views::MatchView;
use crate::domain::TournamentSnapshot;
use crate::ranking::{Ranking, RankingEngine};

/// What the follower is looking at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Standings,
    /// Boards of one team in the current round
    Games { team: String },
}

/// Everything a follow session knows between two steps.
///
/// Never mutated in place: [`SessionState::apply`] consumes the state and
/// returns the next one.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub snapshot: Option<Arc<TournamentSnapshot>>,
    /// Requested round, -1 until the first round is asked for
    pub round_index: i64,
    pub followed_team: Option<String>,
    pub view: View,
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    Loaded(Arc<TournamentSnapshot>),
    NextRound,
    Follow(Option<String>),
    ViewGames(String),
    Back,
    Refresh,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            snapshot: None,
            round_index: -1,
            followed_team: None,
            view: View::Standings,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn apply(self, action: SessionAction, engine: &RankingEngine) -> Self {
        match action {
            SessionAction::Loaded(snapshot) => self.loaded(snapshot),
            SessionAction::NextRound => self.next_round(engine),
            SessionAction::Follow(team) => self.follow(team),
            SessionAction::ViewGames(team) => self.view_games(team, engine),
            SessionAction::Back => Self {
                view: View::Standings,
                ..self
            },
            SessionAction::Refresh => Self {
                snapshot: None,
                round_index: -1,
                view: View::Standings,
                ..self
            },
        }
    }

    /// Refresh, then start over on `fresh`. When the reload produced
    /// nothing the session restarts on the data it already had.
    pub fn reload(self, fresh: Option<Arc<TournamentSnapshot>>, engine: &RankingEngine) -> Self {
        let previous = self.snapshot.clone();
        let state = self.apply(SessionAction::Refresh, engine);
        match fresh.or(previous) {
            Some(snapshot) => state.apply(SessionAction::Loaded(snapshot), engine),
            None => state,
        }
    }

    /// Whether another round can be requested
    pub fn can_advance(&self, engine: &RankingEngine) -> bool {
        self.is_loaded() && self.round_index + 1 < engine.total_rounds() as i64
    }

    pub fn ranking(&self, engine: &RankingEngine) -> Option<Ranking> {
        let snapshot = self.snapshot.as_ref()?;
        engine.rank(&snapshot.teams, self.round_index)
    }

    /// The games screen, when that is the current view
    pub fn match_view(&self, engine: &RankingEngine) -> Option<MatchView> {
        let View::Games { team } = &self.view else {
            return None;
        };
        let snapshot = self.snapshot.as_ref()?;
        let ranking = self.ranking(engine)?;
        MatchView::build(snapshot, &ranking, team)
    }

    fn loaded(self, snapshot: Arc<TournamentSnapshot>) -> Self {
        let followed_team = self
            .followed_team
            .filter(|team| snapshot.find_team(team).is_some());

        Self {
            snapshot: Some(snapshot),
            round_index: -1,
            followed_team,
            view: View::Standings,
        }
    }

    fn next_round(self, engine: &RankingEngine) -> Self {
        if !self.can_advance(engine) {
            return self;
        }
        Self {
            round_index: self.round_index + 1,
            view: View::Standings,
            ..self
        }
    }

    fn follow(self, team: Option<String>) -> Self {
        let known = match (&team, &self.snapshot) {
            (None, _) => true,
            (Some(name), Some(snapshot)) => snapshot.find_team(name).is_some(),
            (Some(_), None) => false,
        };
        if !known {
            return self;
        }
        Self {
            followed_team: team,
            ..self
        }
    }

    fn view_games(self, team: String, engine: &RankingEngine) -> Self {
        let ranked = self
            .ranking(engine)
            .is_some_and(|ranking| ranking.standing_of(&team).is_some());
        if !ranked {
            return self;
        }
        Self {
            view: View::Games { team },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;
    use crate::ranking::TieBreak;

    fn engine() -> RankingEngine {
        RankingEngine::new(3, TieBreak::OriginalOrder)
    }

    fn snapshot() -> Arc<TournamentSnapshot> {
        Arc::new(TournamentSnapshot::new(
            "Event".to_string(),
            "https://example.org".to_string(),
            vec![
                Team::new("A", vec![12.0, 14.0, 9.0]),
                Team::new("B", vec![8.0, 6.0, 11.0]),
            ],
            vec![],
        ))
    }

    fn loaded() -> SessionState {
        SessionState::new().apply(SessionAction::Loaded(snapshot()), &engine())
    }

    #[test]
    fn test_initial_state_has_no_ranking() {
        let state = loaded();

        assert_eq!(state.round_index, -1);
        assert!(state.ranking(&engine()).is_none());
        assert!(state.can_advance(&engine()));
    }

    #[test]
    fn test_next_round_stops_at_last_round() {
        let mut state = loaded();
        for _ in 0..10 {
            state = state.apply(SessionAction::NextRound, &engine());
        }

        assert_eq!(state.round_index, 2);
        assert!(!state.can_advance(&engine()));
        assert_eq!(state.ranking(&engine()).unwrap().round, 2);
    }

    #[test]
    fn test_next_round_needs_data() {
        let state = SessionState::new().apply(SessionAction::NextRound, &engine());

        assert_eq!(state.round_index, -1);
    }

    #[test]
    fn test_follow_only_known_teams() {
        let state = loaded().apply(SessionAction::Follow(Some("A".to_string())), &engine());
        assert_eq!(state.followed_team.as_deref(), Some("A"));

        let state = state.apply(SessionAction::Follow(Some("Z".to_string())), &engine());
        assert_eq!(state.followed_team.as_deref(), Some("A"));

        let state = state.apply(SessionAction::Follow(None), &engine());
        assert_eq!(state.followed_team, None);
    }

    #[test]
    fn test_view_games_and_back() {
        let state = loaded()
            .apply(SessionAction::NextRound, &engine())
            .apply(SessionAction::ViewGames("B".to_string()), &engine());

        assert_eq!(state.view, View::Games { team: "B".to_string() });
        let view = state.match_view(&engine()).unwrap();
        assert_eq!(view.competitor, "A");
        assert_eq!(view.match_number, 1);

        let state = state.apply(SessionAction::Back, &engine());
        assert_eq!(state.view, View::Standings);
        assert!(state.match_view(&engine()).is_none());
    }

    #[test]
    fn test_view_games_before_first_round_is_ignored() {
        let state = loaded().apply(SessionAction::ViewGames("A".to_string()), &engine());

        assert_eq!(state.view, View::Standings);
    }

    #[test]
    fn test_refresh_then_reload_keeps_followed_team() {
        let state = loaded()
            .apply(SessionAction::Follow(Some("B".to_string())), &engine())
            .apply(SessionAction::NextRound, &engine())
            .apply(SessionAction::Refresh, &engine());

        assert!(!state.is_loaded());
        assert_eq!(state.round_index, -1);

        let state = state.apply(SessionAction::Loaded(snapshot()), &engine());
        assert_eq!(state.followed_team.as_deref(), Some("B"));
    }

    #[test]
    fn test_reload_starts_over_on_fresh_data() {
        let fresh = Arc::new(TournamentSnapshot::new(
            "Event, day 2".to_string(),
            "https://example.org".to_string(),
            vec![Team::new("B", vec![8.0]), Team::new("C", vec![3.0])],
            vec![],
        ));
        let state = loaded()
            .apply(SessionAction::Follow(Some("B".to_string())), &engine())
            .apply(SessionAction::NextRound, &engine())
            .reload(Some(fresh), &engine());

        assert_eq!(state.round_index, -1);
        assert_eq!(state.snapshot.as_ref().unwrap().title, "Event, day 2");
        assert_eq!(state.followed_team.as_deref(), Some("B"));
    }

    #[test]
    fn test_failed_reload_keeps_previous_data() {
        let state = loaded()
            .apply(SessionAction::NextRound, &engine())
            .apply(SessionAction::NextRound, &engine())
            .reload(None, &engine());

        assert!(state.is_loaded());
        assert_eq!(state.round_index, -1);
        assert_eq!(state.snapshot.as_ref().unwrap().title, "Event");
    }

    #[test]
    fn test_reload_without_any_data_stays_empty() {
        let state = SessionState::new().reload(None, &engine());

        assert!(!state.is_loaded());
    }
}
