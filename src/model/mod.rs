/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// Request models and the shared request contract
pub mod requests;
/// Response models and response interpretation
pub mod responses;
