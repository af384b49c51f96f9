use std::io::Read;
use std::time::Duration;

use ureq::{Agent, AgentBuilder, Error};

use super::{FileDownloader, Response};

/// Blocking GET over a shared `ureq` agent with a fixed timeout and user agent.
pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let content_type = response.header("Content-Type").map(str::to_string);

                let mut body = Vec::new();

                if response.into_reader().read_to_end(&mut body).is_err() {
                    return Response::invalid_body();
                }

                Response::ok(body, content_type)
            }

            Err(Error::Status(code, _)) => Response::status(code),

            Err(error) => Response::network_error(error.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let agent = AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();

        UReqFetcher { agent }
    }
}
