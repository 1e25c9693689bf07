//! 顶部加载进度条的状态
//!
//! 每次导航开始时调用 [`Progress::start`]，返回的 [`ProgressGuard`] 被丢弃时结束。

use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Progress {
    running: RwSignal<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    pub fn new() -> Self {
        Self {
            running: RwSignal::new(0),
        }
    }

    #[must_use]
    pub fn start(&self) -> ProgressGuard {
        self.running.update(|n| *n += 1);
        ProgressGuard {
            running: self.running,
        }
    }

    /// 是否有导航正在进行（响应式）
    pub fn is_active(&self) -> bool {
        self.running.get() > 0
    }
}

pub struct ProgressGuard {
    running: RwSignal<u32>,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.running.update(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(progress: &Progress) -> u32 {
        progress.running.get_untracked()
    }

    #[test]
    fn finishes_when_every_guard_is_dropped() {
        let progress = Progress::new();
        let first = progress.start();
        let second = progress.start();
        assert_eq!(running(&progress), 2);

        drop(first);
        assert_eq!(running(&progress), 1);
        drop(second);
        assert_eq!(running(&progress), 0);
    }
}
