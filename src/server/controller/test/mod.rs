mod deck;
