use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use tokio::task::JoinHandle;
use tryout::Raise;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sentinel {
  Eof,
}

impl Display for Sentinel {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str("EOF")
  }
}

impl Error for Sentinel {}

async fn read_byte(input: &[u8]) -> Result<u8, Sentinel> {
  input.first().copied().ok_or(Sentinel::Eof)
}

#[tokio::test]
async fn test_recover_future_success() {
  let output: Result<u8, Sentinel> = tryout::recover_future(async {
    let byte: u8 = read_byte(b"\x2a").await.or_raise();
    Ok(byte)
  })
  .await;

  assert_eq!(output, Ok(42));
}

#[tokio::test]
async fn test_recover_future_failure() {
  let output: Result<u8, Sentinel> = tryout::recover_future(async {
    let byte: u8 = read_byte(b"").await.or_raise();
    Ok(byte)
  })
  .await;

  assert_eq!(output, Err(Sentinel::Eof));
}

#[tokio::test]
async fn test_recover_future_across_suspension() {
  let output: Result<(), Sentinel> = tryout::recover_future(async {
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
    tryout::raise0(Some(Sentinel::Eof));
    Ok(())
  })
  .await;

  assert_eq!(output, Err(Sentinel::Eof));
}

#[tokio::test]
async fn test_recover_future_per_task() {
  let handle: JoinHandle<Result<(), Sentinel>> = tokio::spawn(tryout::recover_future(async {
    tryout::raise0(Some(Sentinel::Eof));
    Ok(())
  }));

  assert_eq!(handle.await.unwrap(), Err(Sentinel::Eof));
}

#[tokio::test]
async fn test_recover_future_resumes_foreign_panic() {
  let handle: JoinHandle<Result<(), Sentinel>> = tokio::spawn(tryout::recover_future(async {
    let values: Vec<u8> = Vec::new();
    let _value: u8 = values[1];
    Ok(())
  }));

  assert!(handle.await.unwrap_err().is_panic());
}
