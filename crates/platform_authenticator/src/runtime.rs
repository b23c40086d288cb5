//! Platform runtime context for the calling thread.
use crate::Result;
use std::marker::PhantomData;

/// Guard for the platform runtime context.
///
/// On Windows the thread joins the multithreaded apartment when
/// the context is initialized and leaves it when the guard is
/// dropped. Elsewhere the guard is inert.
///
/// The apartment belongs to the initializing thread so the
/// guard is neither `Send` nor `Sync`.
#[must_use = "the runtime is released when the guard is dropped"]
pub struct RuntimeContext {
    marker: PhantomData<*const ()>,
}

impl RuntimeContext {
    /// Initialize the runtime context for the current thread.
    #[cfg(target_os = "windows")]
    pub fn init() -> Result<Self> {
        use windows::Win32::System::WinRT::{
            RoInitialize, RO_INIT_MULTITHREADED,
        };

        // SAFETY: balanced by RoUninitialize in Drop, which can
        // only run on this thread as the guard is !Send.
        unsafe { RoInitialize(RO_INIT_MULTITHREADED) }
            .map_err(crate::Error::RuntimeInit)?;
        tracing::debug!("runtime::init");
        Ok(Self {
            marker: PhantomData,
        })
    }

    /// Initialize the runtime context for the current thread.
    #[cfg(not(target_os = "windows"))]
    pub fn init() -> Result<Self> {
        Ok(Self {
            marker: PhantomData,
        })
    }
}

#[cfg(target_os = "windows")]
impl Drop for RuntimeContext {
    fn drop(&mut self) {
        // SAFETY: paired with the successful RoInitialize in init().
        unsafe { windows::Win32::System::WinRT::RoUninitialize() };
        tracing::debug!("runtime::release");
    }
}

impl std::fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeContext").finish_non_exhaustive()
    }
}
