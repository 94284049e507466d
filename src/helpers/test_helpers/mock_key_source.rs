use super::*;

/// Hands out a fixed list of keys, then reports end of input
pub struct MockKeySource(VecDeque<TriggerKey>);

impl MockKeySource {
    pub fn new(keys: Vec<TriggerKey>) -> Self {
        Self(keys.into())
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl KeySourceTrait for MockKeySource {
    fn next_key(&mut self) -> io::Result<TriggerKey> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}
