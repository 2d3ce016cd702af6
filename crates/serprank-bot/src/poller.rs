//! Telegram long-poll loop
//!
//! Requests are handled one at a time, in the order Telegram delivers
//! them, so a single provider credential never serves two searches at once.

use std::future::Future;
use std::time::Duration;

use serprank::SearchPageSource;
use serprank_integration_telegram::{TelegramClient, TelegramUpdateParser};
use tracing::{debug, warn};

use crate::handler::RequestHandler;

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Poll for updates until `shutdown` completes.
///
/// Returns the number of requests handled. A request already in progress
/// when `shutdown` fires is abandoned together with its search.
pub async fn poll_updates<S, F>(
    client: &TelegramClient,
    handler: &RequestHandler<S>,
    shutdown: F,
) -> u64
where
    S: SearchPageSource + ?Sized,
    F: Future<Output = ()>,
{
    let parser = TelegramUpdateParser::new();
    let mut offset: Option<i64> = None;
    let mut handled: u64 = 0;

    tokio::pin!(shutdown);

    loop {
        let updates = tokio::select! {
            _ = &mut shutdown => break,
            result = client.get_updates(offset) => result,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(e) => {
                warn!(error = %e, "Failed to fetch Telegram updates, retrying");
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = tokio::time::sleep(RETRY_DELAY) => {}
                }
                continue;
            }
        };

        for update in updates {
            offset = Some(update.update_id + 1);

            let Some(inbound) = parser.parse(&update) else {
                continue;
            };
            debug!(update_id = %inbound.update_id, "Handling inbound message");

            let request = inbound.into_request();
            tokio::select! {
                _ = &mut shutdown => return handled,
                _ = handler.handle(&request) => handled += 1,
            }
        }
    }

    handled
}
