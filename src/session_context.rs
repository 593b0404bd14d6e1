use leptos::prelude::*;

use crate::deck::DeckSession;

/// Editor session owned by the app root, so it survives route changes.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<DeckSession>,
}

pub fn provide_session() -> RwSignal<DeckSession> {
    let session = RwSignal::new(DeckSession::default());
    provide_context(SessionContext { session });
    session
}

pub fn use_session() -> RwSignal<DeckSession> {
    expect_context::<SessionContext>().session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckAction;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_session_outlives_page_owner() {
        let app = Owner::new();
        app.with(provide_session);

        let page = app.child();
        page.with(|| {
            use_session().update(|s| {
                s.reduce(DeckAction::SetTournament("Cup1".to_string()));
                s.reduce(DeckAction::SaveDeck {
                    date: "01-01-2024".to_string(),
                });
            });
        });
        page.cleanup();

        let next_page = app.child();
        let (tournament, saved) = next_page.with(|| {
            use_session().with(|s| (s.tournament.clone(), s.saved_decks.len()))
        });
        assert_eq!(tournament, "Cup1");
        assert_eq!(saved, 1);
    }
}
