//! 过期清理定时器
//!
//! 启动时获取，Drop 时释放：后台 tokio 任务按固定间隔发送 tick，
//! UI 循环在每帧之间取出所有待处理的 tick。

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub struct SweepTimer {
    handle: JoinHandle<()>,
    ticks: UnboundedReceiver<()>,
}

impl SweepTimer {
    /// 启动定时器，必须在 tokio 运行时内调用
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // 第一次 tick 立即完成，跳过
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        debug!("Sweep timer started ({:?})", period);

        Self { handle, ticks }
    }

    /// 取出所有待处理的 tick，返回数量
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SweepTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Sweep timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticks_arrive() {
        let mut timer = SweepTimer::start(Duration::from_millis(10));
        assert!(timer.is_running());
        assert_eq!(timer.drain(), 0);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(timer.drain() >= 1);
    }

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let timer = SweepTimer::start(Duration::from_millis(10));
        let abort = timer.handle.abort_handle();
        drop(timer);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(abort.is_finished());
    }
}
