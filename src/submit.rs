use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;

use crate::error::SubmitError;
use crate::state::form::BookingRequest;

/// Where a booking goes once the form is submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Submitter {
    /// Logs the booking and succeeds after `delay_ms`.
    Simulated { delay_ms: u32 },
    /// POSTs the booking as JSON; any non-2xx status is a failure.
    Http { url: String },
}

impl Submitter {
    pub async fn submit(&self, booking: &BookingRequest) -> Result<(), SubmitError> {
        match self {
            Submitter::Simulated { delay_ms } => {
                info!("Form data: {:?}", booking);
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Submitter::Http { url } => {
                let response = Request::post(url)
                    .json(booking)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Status(response.status()))
                }
            }
        }
    }
}
