use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::error::Result;
use crate::shard::Shard;
use crate::wordset::WordsetLexicon;

impl WordsetLexicon {
    /// Picks up to `max` distinct headwords from one randomly chosen shard.
    ///
    /// With `length`, only headwords of exactly that many characters are
    /// candidates, so fewer than `max` (or none) may come back.
    pub fn random_words<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max: usize,
        length: Option<usize>,
    ) -> Result<Vec<String>> {
        let shards: Vec<Shard> = Shard::all().collect();
        let Some(&shard) = shards.choose(rng) else {
            return Ok(Vec::new());
        };
        let entries = self.read_shard(shard)?;
        let mut words = entries
            .into_keys()
            .filter(|word| length.map_or(true, |length| word.chars().count() == length))
            .choose_multiple(rng, max);
        words.shuffle(rng);
        Ok(words)
    }
}
