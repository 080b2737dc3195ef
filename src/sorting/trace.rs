// Swap tracing hooks
//
// Algorithms never print. Anything that wants to watch a sort in progress
// implements `SwapObserver` and is handed to the algorithm for the call.

/// A single adjacent exchange, reported right after it happened
#[derive(Debug)]
pub struct SwapEvent<'a, T> {
    /// 1-based pass (basic) or round (bidirectional) number
    pub pass: usize,
    /// Index of the left slot of the exchanged pair
    pub index: usize,
    /// Value now at `index + 1`
    pub larger: &'a T,
    /// Value now at `index`
    pub smaller: &'a T,
    /// Full sequence state after the exchange
    pub sequence: &'a [T],
}

pub trait SwapObserver<T> {
    fn on_swap(&mut self, event: SwapEvent<'_, T>);
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl<T> SwapObserver<T> for NoTrace {
    fn on_swap(&mut self, _event: SwapEvent<'_, T>) {}
}

/// Owned copy of a `SwapEvent`
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRecord<T> {
    pub pass: usize,
    pub index: usize,
    pub larger: T,
    pub smaller: T,
    pub sequence: Vec<T>,
}

/// Observer that keeps every event it sees
#[derive(Debug, Clone)]
pub struct SwapRecorder<T> {
    records: Vec<SwapRecord<T>>,
}

impl<T> SwapRecorder<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn records(&self) -> &[SwapRecord<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for SwapRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> SwapObserver<T> for SwapRecorder<T> {
    fn on_swap(&mut self, event: SwapEvent<'_, T>) {
        self.records.push(SwapRecord {
            pass: event.pass,
            index: event.index,
            larger: event.larger.clone(),
            smaller: event.smaller.clone(),
            sequence: event.sequence.to_vec(),
        });
    }
}

impl<T, F> SwapObserver<T> for F
where
    F: FnMut(SwapEvent<'_, T>),
{
    fn on_swap(&mut self, event: SwapEvent<'_, T>) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<O: SwapObserver<i32>>(observer: &mut O) {
        let sequence = [1, 3, 2];
        observer.on_swap(SwapEvent {
            pass: 1,
            index: 0,
            larger: &sequence[1],
            smaller: &sequence[0],
            sequence: &sequence,
        });
    }

    #[test]
    fn test_recorder_keeps_owned_copy() {
        let mut recorder = SwapRecorder::new();
        emit(&mut recorder);
        assert_eq!(recorder.len(), 1);
        let record = &recorder.records()[0];
        assert_eq!(record.pass, 1);
        assert_eq!(record.larger, 3);
        assert_eq!(record.smaller, 1);
        assert_eq!(record.sequence, vec![1, 3, 2]);
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = 0;
        let mut observer = |event: SwapEvent<'_, i32>| seen += event.sequence.len();
        emit(&mut observer);
        assert_eq!(seen, 3);
    }
}
