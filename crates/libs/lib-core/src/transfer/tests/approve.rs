use super::*;
use crate::config::ApprovalTarget;
use crate::erc20;
use crate::service::parse_address;
use alloy_primitives::U256;

#[tokio::test]
async fn test_approve_stablecoin_for_vault() {
    // Arrange
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Deposit);

    // Act
    let hash = flow
        .approve(&Amount::parse("1.5"), &usdc(), &connected(1))
        .await
        .unwrap();

    // Assert
    assert!(hash.starts_with("0x"));
    let sent = wallet.sent.borrow();
    assert_eq!(sent.len(), 1);

    let tx = &sent[0];
    assert_eq!(tx.to, parse_address(USDC).unwrap());
    assert_eq!(tx.from, parse_address(OWNER).unwrap());
    assert_eq!(tx.value, U256::ZERO);
    assert_eq!(tx.chain_id, Some(1));
    assert_eq!(
        tx.data,
        erc20::encode_approve(parse_address(VAULT).unwrap(), U256::from(1_500_000u64))
    );
}

#[tokio::test]
async fn test_approve_scales_eighteen_decimals_exactly() {
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Deposit);

    flow.approve(&Amount::parse("0.1"), &dai(), &connected(10))
        .await
        .unwrap();

    let sent = wallet.sent.borrow();
    let expected = erc20::encode_approve(
        parse_address(VAULT).unwrap(),
        U256::from(100_000_000_000_000_000u64),
    );
    assert_eq!(sent[0].data, expected);
    assert_eq!(sent[0].to, parse_address(DAI).unwrap());
}

#[tokio::test]
async fn test_withdraw_can_approve_receipt_token() {
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let mut config = test_config();
    config.approve_withdraw = ApprovalTarget::ReceiptToken;
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Withdraw);

    flow.approve(&Amount::parse("2"), &usdc(), &connected(10))
        .await
        .unwrap();

    let sent = wallet.sent.borrow();
    assert_eq!(sent[0].to, parse_address(VAULT).unwrap());
}

#[tokio::test]
async fn test_approve_without_account() {
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Deposit);

    let err = flow
        .approve(&Amount::parse("1"), &usdc(), &Connection::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Wallet(_)));
    assert!(wallet.sent.borrow().is_empty());
}

#[tokio::test]
async fn test_approve_rejected_by_wallet() {
    let api = FakeApi::default();
    let wallet = FakeWallet {
        reject: true,
        ..Default::default()
    };
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Deposit);

    let err = flow
        .approve(&Amount::parse("1"), &usdc(), &connected(1))
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Wallet("User rejected the request.".to_string()));
}

#[tokio::test]
async fn test_approve_rejects_sub_unit_amount() {
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Deposit);

    // 0.0000009 USDC is below one base unit (6 decimals)
    let err = flow
        .approve(&Amount::parse("0.0000009"), &usdc(), &connected(1))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(wallet.sent.borrow().is_empty());
}

#[tokio::test]
async fn test_approve_rejects_zero_amount() {
    let api = FakeApi::default();
    let wallet = FakeWallet::default();
    let config = test_config();
    let flow = TransferFlow::new(&api, &wallet, &config, Direction::Withdraw);

    let err = flow
        .approve(&Amount::parse("0"), &dai(), &connected(1))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(wallet.sent.borrow().is_empty());
}
