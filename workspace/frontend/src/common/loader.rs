use std::future::Future;

use wasm_bindgen_futures::spawn_local;

use super::loading::LoadingContext;

/// Runs one view load behind the global loading indicator.
///
/// The indicator is cleared when `task` completes, whatever its outcome.
/// Tasks check their load ticket before rendering and swallow their own
/// errors; nothing is propagated from here.
pub fn spawn_load<Fut>(loading: &LoadingContext, task: Fut)
where
    Fut: Future<Output = ()> + 'static,
{
    let guard = loading.begin();
    spawn_local(async move {
        task.await;
        drop(guard);
    });
}

/// Remembers the most recently issued request of a view.
///
/// A view that reloads on every filter change records each query here and
/// renders a response only while its query is still the latest one.
#[derive(Debug, Default)]
pub struct LatestRequest<Q> {
    latest: Option<Q>,
}

impl<Q: PartialEq> LatestRequest<Q> {
    pub fn issue(&mut self, query: Q) {
        self.latest = Some(query);
    }

    pub fn is_current(&self, query: &Q) -> bool {
        self.latest.as_ref() == Some(query)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::ForecastQuery;

    use super::*;

    #[test]
    fn test_older_query_is_superseded() {
        let mut requests = LatestRequest::default();
        let all_sites = ForecastQuery::default();
        let north_yard = ForecastQuery {
            site_id: Some(2),
            forecast_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        };

        requests.issue(all_sites);
        requests.issue(north_yard);

        assert!(!requests.is_current(&all_sites));
        assert!(requests.is_current(&north_yard));
    }

    #[test]
    fn test_nothing_is_current_before_first_request() {
        let requests = LatestRequest::<ForecastQuery>::default();
        assert!(!requests.is_current(&ForecastQuery::default()));
    }
}
