pub mod speech_api_client;

pub use speech_api_client::SpeechServiceClient;
