//! `delete`: remove a meeting.

use crate::client::ZoomClient;
use crate::error::Result;

pub async fn run(client: &ZoomClient, meeting_id: &str) -> Result<()> {
    client.delete_meeting(meeting_id).await?;
    println!("✅ Meeting {} deleted successfully.", meeting_id.trim());
    Ok(())
}
