pub mod clone;
pub mod cut;
pub mod emotions;
pub mod normalize;
pub mod parse;
pub mod speak;

use castprep_http::BearerClient;
use castprep_minimax::MinimaxClient;

use crate::env::Env;

pub(crate) fn speech_client(env: &Env) -> MinimaxClient<BearerClient> {
    MinimaxClient::new(BearerClient::new(
        &env.minimax_base_url,
        &env.minimax_api_key,
    ))
}
