mod proptest_signing;
