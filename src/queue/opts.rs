use crate::foundation::error::{EaselError, EaselResult};

/// Environment variable read by [`QueueOpts::from_env`].
pub const WORKER_THREADS_ENV: &str = "EASEL_WORKER_THREADS";

/// Where [`crate::InstructionQueue::execute`] runs its replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueOpts {
    /// Size of a dedicated worker pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl QueueOpts {
    /// Use a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Read the pool size from `EASEL_WORKER_THREADS`; unset, unparsable or zero values fall
    /// back to the global pool.
    pub fn from_env() -> Self {
        Self {
            threads: threads_from(std::env::var(WORKER_THREADS_ENV).ok().as_deref()),
        }
    }
}

fn threads_from(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> EaselResult<Option<rayon::ThreadPool>> {
    let Some(n) = threads else {
        return Ok(None);
    };
    if n == 0 {
        return Err(EaselError::invalid_argument(
            "queue worker 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .thread_name(|i| format!("easel-worker-{i}"))
        .build()
        .map(Some)
        .map_err(|e| EaselError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/queue/opts.rs"]
mod tests;
