use crate::character::{Character, Ride};
use crate::error::{PlaygroundError, Result};

/// Opaque handle to a registered character. Stable for the session since
/// characters are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(u32);

impl CharacterId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Characters in creation order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    characters: Vec<Character>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: Character) -> CharacterId {
        let id = CharacterId(self.characters.len() as u32);
        self.characters.push(character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Result<&Character> {
        self.characters
            .get(id.index())
            .ok_or(PlaygroundError::UnknownCharacter(id))
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Result<&mut Character> {
        self.characters
            .get_mut(id.index())
            .ok_or(PlaygroundError::UnknownCharacter(id))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (CharacterId(i as u32), c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.characters.iter_mut()
    }

    pub fn riders(&self, ride: Ride) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(move |c| c.ride() == ride)
    }

    pub fn rider_count(&self, ride: Ride) -> usize {
        self.riders(ride).count()
    }
}
