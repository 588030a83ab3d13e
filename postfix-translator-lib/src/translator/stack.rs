use crate::translator::maybe::Maybe;

/// Stack operations on a vector whose tail is the top of the stack.
pub trait StackExt<T> {
    /// The top of the stack, if there is one.
    fn maybe_last(&self) -> Maybe<&T>;

    /// Pops items onto the end of `target` for as long as the top of the stack
    /// satisfies `condition`. Stops at the first item that does not, or when
    /// the stack runs out.
    fn move_items_to_while(&mut self, target: &mut Vec<T>, condition: impl FnMut(&T) -> bool);
}

impl<T> StackExt<T> for Vec<T> {
    fn maybe_last(&self) -> Maybe<&T> {
        Maybe::from_condition(!self.is_empty(), || &self[self.len() - 1])
    }

    fn move_items_to_while(&mut self, target: &mut Vec<T>, mut condition: impl FnMut(&T) -> bool) {
        while self
            .maybe_last()
            .evaluate_strict(false, |top| condition(top))
        {
            if let Some(item) = self.pop() {
                target.push(item);
            }
        }
    }
}
