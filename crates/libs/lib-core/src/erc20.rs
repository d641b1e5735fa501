//! ERC-20 allowance encoding.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// 4-byte selector of `approve(address,uint256)`.
pub const APPROVE_SELECTOR: [u8; 4] = IERC20::approveCall::SELECTOR;

/// ABI-encode `approve(spender, amount)`.
pub fn encode_approve(spender: Address, amount: U256) -> Bytes {
    IERC20::approveCall { spender, amount }.abi_encode().into()
}
