//! `info`: dump a meeting as pretty JSON.

use crate::client::ZoomClient;
use crate::error::Result;

pub async fn run(client: &ZoomClient, meeting_id: &str) -> Result<()> {
    let info = client.get_meeting(meeting_id).await?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
