//! All-or-nothing listener registration.

/// Register every target in order.
///
/// On the first failure the targets registered so far are unregistered again,
/// in order, and the error is returned, so no listener is left pointing at a
/// closure the caller is about to drop.
pub fn register_all<T, E>(
    targets: &[T],
    mut register: impl FnMut(&T) -> Result<(), E>,
    mut unregister: impl FnMut(&T),
) -> Result<(), E> {
    for (index, target) in targets.iter().enumerate() {
        if let Err(err) = register(target) {
            targets[..index].iter().for_each(&mut unregister);
            return Err(err);
        }
    }
    Ok(())
}
