use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use serde::{Deserialize, Serialize};

use crate::data::{fetch::Fetch, game::GameSummary};

#[derive(Clone, Data, Lens, Deserialize)]
pub struct GameList {
    pub id: u64,
    pub name: Arc<str>,
}

impl GameList {
    pub fn link(&self) -> ListLink {
        ListLink {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct ListLink {
    pub id: u64,
    pub name: Arc<str>,
}

#[derive(Clone, Data, Lens)]
pub struct ListGames {
    pub list: ListLink,
    pub games: Vector<Arc<GameSummary>>,
}

impl ListGames {
    /// Moves the game identified by `active_id` to the position of `over_id`,
    /// shifting the games in between. Returns the move to be confirmed with
    /// the server, or `None` if the gesture does not change the ordering.
    pub fn move_game(&mut self, active_id: u64, over_id: u64) -> Option<ReorderMove> {
        let source_index = self.games.iter().position(|g| g.id == active_id)?;
        let destination_index = self.games.iter().position(|g| g.id == over_id)?;
        if source_index == destination_index {
            return None;
        }
        let previous = self.games.clone();
        let game = self.games.remove(source_index);
        self.games.insert(destination_index, game);
        Some(ReorderMove {
            list: self.list.clone(),
            source_index,
            destination_index,
            previous,
        })
    }
}

/// One optimistically applied reordering, with the indices reported to the
/// server and the ordering to restore if the confirmation fails.
#[derive(Clone, Data)]
pub struct ReorderMove {
    pub list: ListLink,
    pub source_index: usize,
    pub destination_index: usize,
    pub previous: Vector<Arc<GameSummary>>,
}

#[derive(Clone, Data, Lens, Default)]
pub struct OpenList {
    pub games: Fetch<ListGames, ListLink>,
}

impl OpenList {
    pub fn move_game(&mut self, active_id: u64, over_id: u64) -> Option<ReorderMove> {
        match &mut self.games {
            Fetch::Ready(games) => games.move_game(active_id, over_id),
            _ => None,
        }
    }

    /// Restores the ordering captured before a failed move. Does nothing if
    /// the view has since moved on to a different list or dropped the rows.
    pub fn revert_move(&mut self, mov: &ReorderMove) {
        if let Fetch::Ready(games) = &mut self.games {
            if games.list.id == mov.list.id {
                games.games = mov.previous.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64) -> Arc<GameSummary> {
        Arc::new(GameSummary {
            id,
            title: format!("Game {}", id).into(),
            short_description: "".into(),
            img_url: "".into(),
        })
    }

    fn list_games(ids: &[u64]) -> ListGames {
        ListGames {
            list: ListLink {
                id: 1,
                name: "Favorites".into(),
            },
            games: ids.iter().copied().map(game).collect(),
        }
    }

    fn ids(games: &ListGames) -> Vec<u64> {
        games.games.iter().map(|g| g.id).collect()
    }

    fn loaded_ids(list: &OpenList) -> Vec<u64> {
        match &list.games {
            Fetch::Ready(games) => ids(games),
            _ => panic!("games are not loaded"),
        }
    }

    #[test]
    fn move_game_preserves_the_other_games() {
        let initial: Vec<u64> = vec![1, 2, 3, 4, 5];
        for old in 0..initial.len() {
            for new in 0..initial.len() {
                let mut games = list_games(&initial);
                let moved = games.move_game(initial[old], initial[new]);
                if old == new {
                    assert!(moved.is_none());
                    assert_eq!(ids(&games), initial);
                    continue;
                }
                let mut expected = initial.clone();
                let id = expected.remove(old);
                expected.insert(new, id);
                assert_eq!(ids(&games), expected);

                let mut sorted = ids(&games);
                sorted.sort_unstable();
                assert_eq!(sorted, initial);

                let rest: Vec<u64> = ids(&games)
                    .into_iter()
                    .filter(|id| *id != initial[old])
                    .collect();
                let rest_before: Vec<u64> = initial
                    .iter()
                    .copied()
                    .filter(|id| *id != initial[old])
                    .collect();
                assert_eq!(rest, rest_before);
            }
        }
    }

    #[test]
    fn move_game_shifts_the_games_in_between() {
        let mut games = list_games(&[1, 2, 3, 4]);
        let moved = games.move_game(1, 3).expect("move should apply");
        assert_eq!(ids(&games), vec![2, 3, 1, 4]);
        assert_eq!(moved.source_index, 0);
        assert_eq!(moved.destination_index, 2);
    }

    #[test]
    fn move_game_onto_itself_is_a_no_op() {
        let mut games = list_games(&[1, 2, 3]);
        assert!(games.move_game(2, 2).is_none());
        assert_eq!(ids(&games), vec![1, 2, 3]);
    }

    #[test]
    fn move_game_with_an_unknown_id_is_a_no_op() {
        let mut games = list_games(&[1, 2, 3]);
        assert!(games.move_game(7, 1).is_none());
        assert!(games.move_game(1, 7).is_none());
        assert_eq!(ids(&games), vec![1, 2, 3]);
    }

    #[test]
    fn move_game_needs_loaded_games() {
        let mut list = OpenList::default();
        assert!(list.move_game(1, 2).is_none());
    }

    #[test]
    fn revert_restores_the_snapshot_taken_before_the_move() {
        let mut list = OpenList {
            games: Fetch::Ready(list_games(&[1, 2, 3, 4])),
        };
        let first = list.move_game(1, 3).expect("move should apply");
        assert_eq!(loaded_ids(&list), vec![2, 3, 1, 4]);
        let _second = list.move_game(4, 2).expect("move should apply");
        assert_eq!(loaded_ids(&list), vec![4, 2, 3, 1]);

        list.revert_move(&first);
        assert_eq!(loaded_ids(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn revert_ignores_moves_from_another_list() {
        let mut list = OpenList {
            games: Fetch::Ready(list_games(&[1, 2, 3])),
        };
        let mov = list.move_game(1, 3).expect("move should apply");
        let mut other = mov.clone();
        other.list = ListLink {
            id: 99,
            name: "Other".into(),
        };
        list.revert_move(&other);
        assert_eq!(loaded_ids(&list), vec![2, 3, 1]);

        list.revert_move(&mov);
        assert_eq!(loaded_ids(&list), vec![1, 2, 3]);
    }
}
