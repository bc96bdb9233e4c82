//! Platform glue for detaching futures from the render loop.

/// Spawn a future that outlives the current callback.
///
/// Used for step-delay timers that post events back into a view
/// coroutine. Web builds ride the browser microtask queue; native
/// builds land on the Dioxus desktop tokio runtime.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(fut);
}
